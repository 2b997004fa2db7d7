//! Treeviz formatter for built trees
//!
//! One line per node, two spaces of indentation per level:
//!
//!     <indentation><icon><space><label>
//!
//! Labels are truncated to 30 characters. Tags show their tag type in brackets once
//! the ontology has assigned one.
//!
//!     ⧉ Biology Guide
//!       § Science [Category]
//!         § Cells [Topic]
//!           • What is a cell? → Unit of life
//!           ¶ Cell Theory
//!             • What are living things made...
//!
//! Icons
//!     Root: ⧉
//!     Tag: §
//!     Passage: ¶
//!     Question: •

use super::registry::{FormatError, Formatter};
use crate::guide::ast::{Passage, Question, Tag, Tree};

const MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn push_line(output: &mut String, depth: usize, icon: &str, label: &str) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(icon);
    output.push(' ');
    output.push_str(label);
    output.push('\n');
}

fn question_label(question: &Question) -> String {
    format!(
        "{} → {}",
        truncate(&question.prompt, MAX_LABEL),
        truncate(&question.answer, MAX_LABEL)
    )
}

fn format_passage(output: &mut String, passage: &Passage, depth: usize) {
    push_line(output, depth, "¶", &truncate(&passage.title, MAX_LABEL));
    for question in &passage.questions {
        push_line(output, depth + 1, "•", &question_label(question));
    }
}

fn format_tag(output: &mut String, tag: &Tag, depth: usize) {
    let mut label = truncate(&tag.title, MAX_LABEL);
    if !tag.tag_type.is_none() {
        label.push_str(&format!(" [{}]", tag.tag_type));
    }
    push_line(output, depth, "§", &label);
    for question in &tag.questions {
        push_line(output, depth + 1, "•", &question_label(question));
    }
    for passage in &tag.passages {
        format_passage(output, passage, depth + 1);
    }
    for child in &tag.child_tags {
        format_tag(output, child, depth + 1);
    }
}

/// Render a tree as treeviz text.
pub fn to_treeviz_str(tree: &Tree) -> String {
    let mut output = String::new();
    push_line(&mut output, 0, "⧉", &truncate(&tree.root.title, MAX_LABEL));
    for tag in &tree.root.child_tags {
        format_tag(&mut output, tag, 1);
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &'static str {
        "One line per node with icons and indentation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::ast::Root;
    use crate::guide::ids::SequentialIds;
    use crate::guide::metadata::Metadata;
    use crate::guide::ontology::TagType;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn renders_nested_tags_and_questions() {
        let ids = SequentialIds::new();
        let mut cells = Tag::new("Cells", "h2", "i2");
        cells.tag_type = TagType::Topic;
        cells
            .questions
            .push(Question::new("What is a cell?", "Unit of life", "", &ids));
        cells.passages.push(Passage::new(
            "Cell Theory",
            "body",
            vec![Question::new("Made of?", "Cells", "", &ids)],
            &ids,
        ));
        let mut science = Tag::new("Science", "h1", "i1");
        science.child_tags.push(cells);
        let mut root = Root::new("Biology Guide");
        root.child_tags.push(science);
        let tree = Tree::new(root, Metadata::default());

        assert_eq!(
            to_treeviz_str(&tree),
            "⧉ Biology Guide\n\
             \x20 § Science\n\
             \x20   § Cells [Topic]\n\
             \x20     • What is a cell? → Unit of life\n\
             \x20     ¶ Cell Theory\n\
             \x20       • Made of? → Cells\n"
        );
    }
}
