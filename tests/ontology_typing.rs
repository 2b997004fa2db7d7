//! Ontology assignment through the pipeline

use rstest::rstest;
use studyguide::guide::metadata::Metadata;
use studyguide::guide::ontology::{ContextType, TagType};
use studyguide::guide::pipeline::{Pipeline, PipelineError};
use studyguide::guide::testing::{assert_tree, Samples};

fn chain(depth: usize) -> String {
    let parts: Vec<String> = (1..=depth).map(|d| format!("Level{d}")).collect();
    format!("Guide\n{}\n1. Q? - A\n", parts.join(": "))
}

#[test]
fn colleges_sample_is_fully_typed() {
    let tree = Samples::colleges().compile().unwrap();
    let path = [
        "Sciences",
        "West",
        "State University",
        "Biology",
        "BIO 101",
        "Cells",
    ];
    let expected = [
        TagType::Category,
        TagType::Region,
        TagType::University,
        TagType::Department,
        TagType::Course,
        TagType::Topic,
    ];

    let mut tree_assert = assert_tree(&tree)
        .context_type(ContextType::Colleges)
        .max_depth(6)
        .all_typed()
        .qa_passed(true);
    for depth in 1..=6 {
        tree_assert = tree_assert.tag(&path[..depth], |tag| {
            tag.tag_type(expected[depth - 1])
                .context_type(ContextType::Colleges);
        });
    }
    tree_assert
        .tag(&path, |cells| {
            cells
                .question_count(2)
                .question(1, |q| {
                    q.learn_more("Chapter 3 covers membranes");
                })
                .passage(0, |p| {
                    p.title("Cell Theory")
                        .content_contains("pre-existing cells")
                        .question_count(1);
                });
        })
        .tag(&path[..5], |course| {
            course.child_titles(&["Cells", "Genetics"]);
        });
}

#[test]
fn colleges_needs_six_levels() {
    let pipeline = Pipeline::new();
    let metadata = Metadata::default().with_context(ContextType::Colleges);

    let err = pipeline.compile(&chain(7), metadata.clone()).unwrap_err();
    assert!(matches!(err, PipelineError::Ontology(_)));
    assert_eq!(
        err.to_string(),
        "no ontology found for context type 'Colleges' with depth 7"
    );

    assert!(pipeline.compile(&chain(5), metadata).is_err());
}

#[test]
fn shorter_branches_use_the_deepest_row() {
    let tree = Samples::ap_exam().compile().unwrap();
    assert_tree(&tree)
        .max_depth(4)
        .qa_passed(true)
        .tag(&["History", "AP Chemistry"], |t| {
            t.tag_type(TagType::APExam).child_titles(&["Atomic Structure", "Bonding"]);
        })
        .tag(&["History", "AP Chemistry", "Bonding"], |t| {
            t.tag_type(TagType::Module).question_count(1);
        })
        .tag(&["History", "AP Chemistry", "Atomic Structure", "Electrons"], |t| {
            t.tag_type(TagType::Topic);
        });
}

#[rstest]
#[case(ContextType::APExams, 3, true)]
#[case(ContextType::APExams, 6, true)]
#[case(ContextType::APExams, 7, false)]
#[case(ContextType::EntranceExams, 7, false)]
#[case(ContextType::Certifications, 4, true)]
#[case(ContextType::Certifications, 9, true)]
#[case(ContextType::DoD, 4, true)]
#[case(ContextType::DoD, 8, true)]
#[case(ContextType::Encyclopedia, 4, true)]
#[case(ContextType::UserGeneratedContent, 3, false)]
fn ontology_rows_by_depth(#[case] context: ContextType, #[case] depth: usize, #[case] found: bool) {
    let result = Pipeline::new().compile(&chain(depth), Metadata::default().with_context(context));
    assert_eq!(result.is_ok(), found, "{context} at depth {depth}");
    if let Ok(tree) = result {
        assert_tree(&tree).all_typed().qa_passed(true);
    }
}
