//! Snapshot of the treeviz rendering of the end-to-end sample

use studyguide::guide::formats::{to_treeviz_str, FormatRegistry};
use studyguide::guide::testing::Samples;

#[test]
fn end_to_end_treeviz() {
    let tree = Samples::end_to_end().compile().unwrap();
    let output = to_treeviz_str(&tree);
    insta::assert_snapshot!(output.trim_end(), @r###"
    ⧉ TestFile
      § TagA
        § TagB
          § TagC
            § TagD
              • What is 1 + 1? → 2
              • What is 2 → 2? - 0
              ¶ Tim had 5 apples and gave Mike...
                • How many apples are there? → 5
                • How many apples does Tim have? → 2
                • How many apples does Mike have... → 3
    "###);
}

#[test]
fn registry_renders_typed_tags() {
    let tree = Samples::ap_exam().compile().unwrap();
    let output = FormatRegistry::with_defaults()
        .serialize(&tree, "treeviz")
        .unwrap();
    insta::assert_snapshot!(output.trim_end(), @r###"
    ⧉ AP Chemistry Review
      § History [Category]
        § AP Chemistry [AP_Exam]
          § Atomic Structure [Module]
            § Electrons [Topic]
              • What is an electron's charge? → Negative
          § Bonding [Module]
            • What bond shares electrons? → Covalent
    "###);
}
