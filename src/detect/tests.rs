// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{detect, explain, Candidate, Classifier, DetectionSource};
use crate::config::{ClassifierConfig, PatternConfig};
use crate::model::DiagramTypeId;

#[fixture]
fn classifier() -> &'static Classifier {
    Classifier::builtin()
}

fn candidate(type_id: &str, priority: u32, score: u32) -> Candidate {
    Candidate {
        type_id: DiagramTypeId::new(type_id).expect("type id"),
        priority,
        score,
    }
}

fn keyword_row(type_id: &str, priority: Option<u32>, keywords: &[&str]) -> PatternConfig {
    PatternConfig {
        type_id: type_id.to_owned(),
        signature: None,
        priority,
        keywords: keywords.iter().map(|token| (*token).to_owned()).collect(),
    }
}

#[rstest]
#[case::mermaid_graph("graph TD\nA-->B", "mermaid", "flowchart")]
#[case::mermaid_flowchart_lr("flowchart LR\n  a --> b", "mermaid", "flowchart")]
#[case::sequence("sequenceDiagram\nA->>B: hi", "mermaid", "sequence")]
#[case::state_v2("stateDiagram-v2\n[*] --> Idle", "mermaid", "state")]
#[case::class("classDiagram\nAnimal <|-- Dog", "mermaid", "class")]
#[case::gantt("gantt\n title Plan\n dateFormat YYYY-MM-DD", "mermaid", "gantt")]
#[case::pie("pie showData\n \"a\" : 1", "mermaid", "pie")]
#[case::er("erDiagram\n CUSTOMER ||--o{ ORDER : places", "mermaid", "er")]
#[case::journey("journey\n title Day\n section Work", "mermaid", "journey")]
#[case::digraph("digraph G { A -> B }", "graphviz", "digraph")]
#[case::graph("graph G {\n a -- b\n}", "graphviz", "graph")]
#[case::strict("strict digraph G { a -> b }", "graphviz", "strict")]
#[case::usecase("@startuml\nactor Bob\nusecase UC1\n@enduml", "plantuml", "usecase")]
#[case::activity("@startuml\nstart\n:step;\nstop\n@enduml", "plantuml", "activity")]
#[case::component("@startuml\ncomponent API\n@enduml", "plantuml", "component")]
#[case::math("\\begin{equation}\nE = mc^2\n\\end{equation}", "mathjax", "math")]
fn signatures_identify_their_grammar(
    classifier: &Classifier,
    #[case] text: &str,
    #[case] renderer: &str,
    #[case] expected: &str,
) {
    let detection = classifier.explain(text, renderer);
    assert_eq!(detection.type_id, expected, "text: {text:?}");
    assert_eq!(detection.source, DetectionSource::Signature);
}

#[rstest]
fn signatures_ignore_case_and_leading_whitespace(classifier: &Classifier) {
    assert_eq!(classifier.detect("\n\n   SEQUENCEDIAGRAM\n", "graphviz"), "sequence");
    assert_eq!(classifier.detect("\t Graph lr\n a-->b", "graphviz"), "flowchart");
}

#[rstest]
#[case::bom_digraph("\u{feff}digraph G { a -> b }", "mermaid", "digraph")]
#[case::bom_pie("\u{feff}pie\n \"a\" : 1", "graphviz", "pie")]
#[case::accented_prefix("@startuml\n\u{e9}actor Bob", "plantuml", "usecase")]
#[case::accented_suffix("@startuml\nnode\u{e9} x\n@enduml", "plantuml", "component")]
fn signatures_use_ascii_boundaries_and_skip_a_bom(
    classifier: &Classifier,
    #[case] text: &str,
    #[case] renderer: &str,
    #[case] expected: &str,
) {
    let detection = classifier.explain(text, renderer);
    assert_eq!(detection.type_id, expected, "text: {text:?}");
    assert_eq!(detection.source, DetectionSource::Signature);
}

#[rstest]
fn identifiers_after_dot_headers_are_ascii(classifier: &Classifier) {
    let detection = classifier.explain("digraph \u{e9}t\u{e9} { a -> b }", "mermaid");
    assert_eq!(detection.source, DetectionSource::Keywords);
}

#[rstest]
fn signatures_only_match_at_the_start(classifier: &Classifier) {
    let detection = classifier.explain("%% comment\nsequenceDiagram\nA->>B: hi", "graphviz");
    assert_eq!(detection.source, DetectionSource::Keywords);
    assert_eq!(detection.type_id, "sequence");
}

#[rstest]
#[case::graphviz("graphviz")]
#[case::mathjax("mathjax")]
#[case::unknown("unknownRenderer")]
fn empty_input_is_always_flowchart(classifier: &Classifier, #[case] renderer: &str) {
    let detection = classifier.explain("", renderer);
    assert_eq!(detection.type_id, "flowchart");
    assert_eq!(detection.source, DetectionSource::EmptyInput);
    assert!(detection.candidates.is_empty());
}

#[rstest]
fn missing_input_is_treated_as_empty(classifier: &Classifier) {
    assert_eq!(classifier.detect_opt(None, "graphviz"), "flowchart");
    assert_eq!(classifier.detect_opt(Some("digraph g {"), "mermaid"), "digraph");
}

#[rstest]
#[case::mathjax("mathjax", "math")]
#[case::graphviz("graphviz", "digraph")]
#[case::plantuml("plantuml", "sequence")]
#[case::flowchartjs("flowchartjs", "flowchart")]
#[case::unknown("unknownRenderer", "flowchart")]
#[case::case_sensitive("MathJax", "flowchart")]
fn unmatched_text_falls_back_to_the_renderer_default(
    classifier: &Classifier,
    #[case] renderer: &str,
    #[case] expected: &str,
) {
    let detection = classifier.explain("xyz123", renderer);
    assert_eq!(detection.type_id, expected);
    assert_eq!(detection.source, DetectionSource::RendererDefault);
    assert!(detection.candidates.is_empty());
}

#[rstest]
fn whitespace_only_input_is_not_empty(classifier: &Classifier) {
    let detection = classifier.explain("   \n\t", "graphviz");
    assert_eq!(detection.type_id, "digraph");
    assert_eq!(detection.source, DetectionSource::RendererDefault);
}

#[rstest]
fn arrow_and_node_text_prefers_flowchart_over_graphviz(classifier: &Classifier) {
    let detection = classifier.explain("some random text with --> and node", "graphviz");

    assert_eq!(detection.type_id, "flowchart");
    assert_eq!(detection.source, DetectionSource::Keywords);
    assert_eq!(
        detection.candidates.to_vec(),
        vec![
            candidate("flowchart", 10, 20),
            candidate("sequence", 10, 10),
            candidate("state", 10, 10),
            candidate("digraph", 5, 20),
            candidate("graph", 5, 20),
            candidate("usecase", 5, 10),
        ]
    );
}

#[rstest]
fn doubled_arrow_keyword_breaks_the_flowchart_state_tie(classifier: &Classifier) {
    let detection = classifier.explain("A --> B", "mermaid");
    assert_eq!(detection.type_id, "flowchart");
    assert_eq!(detection.candidates[0], candidate("flowchart", 10, 20));
}

#[rstest]
fn exact_keyword_ties_resolve_to_the_earliest_row(classifier: &Classifier) {
    let detection = classifier.explain("title", "graphviz");
    assert_eq!(detection.type_id, "gantt");
    assert_eq!(
        detection.candidates.to_vec(),
        vec![candidate("gantt", 10, 10), candidate("pie", 10, 10), candidate("journey", 10, 10)]
    );
}

#[rstest]
fn higher_priority_signature_beats_lower_priority_signature(classifier: &Classifier) {
    // `graph TD {` satisfies both the Mermaid flowchart and the DOT undirected-graph signature.
    let text = "graph TD {\n a -- b\n node [shape=box]\n edge [color=red]\n subgraph x {}\n}";
    let detection = classifier.explain(text, "graphviz");
    assert_eq!(detection.type_id, "flowchart");
    assert_eq!(
        detection.candidates.to_vec(),
        vec![candidate("flowchart", 10, 100), candidate("graph", 5, 100)]
    );
}

#[rstest]
fn plantuml_rows_are_ranked_by_table_order(classifier: &Classifier) {
    let text = "@startuml\nactor User\nstart\ncomponent Billing\n@enduml";
    let detection = classifier.explain(text, "plantuml");
    assert_eq!(detection.type_id, "usecase");
    let order =
        detection.candidates.iter().map(|c| c.type_id.as_str().to_owned()).collect::<Vec<_>>();
    assert_eq!(order, vec!["usecase", "activity", "component"]);
}

#[rstest]
fn signature_match_skips_the_keyword_pass(classifier: &Classifier) {
    let text = "pie\n->> -->> -> note participant actor [*] state section title";
    let detection = classifier.explain(text, "mermaid");
    assert_eq!(detection.type_id, "pie");
    assert_eq!(detection.candidates.to_vec(), vec![candidate("pie", 10, 100)]);
}

#[rstest]
fn startuml_needs_a_marker_keyword(classifier: &Classifier) {
    // `start` inside `@startuml` is not a standalone word.
    let detection = classifier.explain("@startuml\nBob -> Alice : hello\n@enduml", "plantuml");
    assert_eq!(detection.source, DetectionSource::Keywords);
    assert_eq!(detection.type_id, "sequence");
}

#[rstest]
fn keyword_pass_scores_math_tokens(classifier: &Classifier) {
    let detection = classifier.explain(r"x = \frac{\alpha}{\beta}", "mermaid");
    assert_eq!(detection.type_id, "math");
    assert_eq!(detection.candidates.to_vec(), vec![candidate("math", 5, 30)]);
}

#[test]
fn keyword_only_rows_use_the_default_priority() {
    let config = ClassifierConfig {
        patterns: vec![
            keyword_row("timeline", None, &["section", "title"]),
            keyword_row("pie", Some(10), &["title"]),
        ],
        renderer_defaults: Default::default(),
        fallback_type: "pie".to_owned(),
    };
    let classifier = config.compile().expect("compile");

    let detection = classifier.explain("title\nsection A", "mermaid");
    assert_eq!(detection.type_id, "pie");
    assert_eq!(
        detection.candidates.to_vec(),
        vec![candidate("pie", 10, 10), candidate("timeline", 5, 20)]
    );
}

#[test]
fn registration_order_decides_exact_ties_in_custom_tables() {
    let build = |first: &str, second: &str| {
        ClassifierConfig {
            patterns: vec![
                keyword_row(first, Some(7), &["shared"]),
                keyword_row(second, Some(7), &["shared"]),
            ],
            renderer_defaults: Default::default(),
            fallback_type: "flowchart".to_owned(),
        }
        .compile()
        .expect("compile")
    };

    assert_eq!(build("alpha", "beta").detect("shared", "x"), "alpha");
    assert_eq!(build("beta", "alpha").detect("shared", "x"), "beta");
}

#[rstest]
fn detection_is_total_and_deterministic(classifier: &Classifier) {
    let huge = "graph TD\n".to_owned() + &"A-->B\n".repeat(50_000);
    let adversarial = "sequenceDiagram\ngraph TD\ndigraph G {\n@startuml actor\n\\begin{equation}";
    let inputs = [
        "",
        " ",
        "\u{0}",
        "\u{4e2d}\u{6587}",
        "[",
        "((((((((((",
        adversarial,
        huge.as_str(),
    ];

    for renderer in ["mermaid", "graphviz", "", "\u{1f600}"] {
        for text in inputs {
            let first = classifier.detect(text, renderer);
            let second = classifier.detect(text, renderer);
            assert!(!first.as_str().is_empty());
            assert_eq!(first, second);
        }
    }

    assert_eq!(classifier.detect(adversarial, "mermaid"), "sequence");
    assert_eq!(classifier.detect(&huge, "mermaid"), "flowchart");
}

#[test]
fn free_functions_use_the_builtin_classifier() {
    assert_eq!(detect("erDiagram\n A ||--o{ B : has", "mermaid"), "er");
    assert_eq!(explain("xyz123", "mathjax").source, DetectionSource::RendererDefault);
    assert!(std::ptr::eq(Classifier::builtin(), Classifier::builtin()));
}

#[test]
fn classifier_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Classifier>();

    let classifier = Classifier::builtin();
    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| classifier.detect("sequenceDiagram\nA->>B: x", "mermaid")))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().expect("join"), "sequence");
        }
    });
}
