//! Inbound envelope vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use embedlink_core::protocol::inbound::{decode_event, EmbedEvent};

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn event_vectors() {
    let files = [
        "event_ready.json",
        "event_ready_extra_fields.json",
        "event_started.json",
        "event_progress_ok.json",
        "event_progress_out_of_range.json",
        "event_progress_missing_percent.json",
        "event_progress_wrong_type.json",
        "event_completed_score.json",
        "event_completed_no_score.json",
        "event_submitted.json",
        "event_error_report.json",
        "event_wrong_type_literal.json",
        "event_unknown_kind.json",
        "event_invalid_json.json",
    ];

    for f in files {
        let v = load(f);
        let res = decode_event(&v.body_text());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.diag_code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let env = res.expect("expected ok envelope");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(
            env.payload.kind(),
            ex["event"].as_str().unwrap(),
            "vector={}",
            v.description
        );
        assert_eq!(
            env.major(),
            ex["major"].as_str().unwrap(),
            "vector={}",
            v.description
        );

        match &env.payload {
            EmbedEvent::Progress { percent } => {
                assert_eq!(
                    *percent,
                    ex["percent"].as_f64().unwrap(),
                    "vector={}",
                    v.description
                );
            }
            EmbedEvent::Completed { score } => {
                if ex.get("score").is_some() && !ex["score"].is_null() {
                    assert_eq!(
                        score.unwrap(),
                        ex["score"].as_f64().unwrap(),
                        "vector={}",
                        v.description
                    );
                } else {
                    assert!(score.is_none(), "vector={}", v.description);
                }
            }
            EmbedEvent::Submitted { submission } => {
                assert_eq!(
                    submission.kind,
                    ex["submission_type"].as_str().unwrap(),
                    "vector={}",
                    v.description
                );
                assert_eq!(
                    submission.content,
                    ex["submission_content"],
                    "vector={}",
                    v.description
                );
            }
            EmbedEvent::Error { message } => {
                assert_eq!(
                    message,
                    ex["message"].as_str().unwrap(),
                    "vector={}",
                    v.description
                );
            }
            EmbedEvent::Ready | EmbedEvent::Started => {}
        }
    }
}
