use chatlens::models::{ChatExport, Content, MessagePart, Recipient, Role};
use chatlens::schema::IssueKind;
use chatlens::validate::{DIAGNOSTIC_LIMIT, check_export, validate};
use serde_json::{Value, json};

fn message(id: &str, content: Value) -> Value {
    json!({
        "id": id,
        "author": {"role": "user", "name": null, "metadata": {}},
        "create_time": 1_700_000_050.0,
        "update_time": null,
        "content": content,
        "status": "finished_successfully",
        "end_turn": null,
        "weight": 1.0,
        "metadata": {},
        "recipient": "all",
        "channel": null
    })
}

fn thread_with_content(content: Value) -> Value {
    json!({
        "id": "conv-1",
        "title": "Greeting",
        "create_time": 1_700_000_000.0,
        "update_time": 1_700_000_100.5,
        "mapping": {
            "a": {"id": "a", "message": null, "parent": null, "children": ["b"]},
            "b": {"id": "b", "message": message("m-1", content), "parent": "a", "children": []}
        },
        "moderation_results": [],
        "current_node": "b",
        "plugin_ids": null,
        "conversation_id": "conv-1",
        "conversation_template_id": null,
        "conversation_origin": null,
        "gizmo_id": null,
        "gizmo_type": null,
        "is_archived": false,
        "is_starred": null,
        "safe_urls": [],
        "default_model_slug": "gpt-4o",
        "voice": null,
        "async_status": null,
        "disabled_tool_ids": []
    })
}

fn thread() -> Value {
    thread_with_content(json!({"content_type": "text", "parts": ["hi"]}))
}

fn issue_paths(document: &Value) -> Vec<(IssueKind, String)> {
    check_export(document)
        .into_iter()
        .map(|issue| (issue.kind, issue.rendered_path()))
        .collect()
}

#[test]
fn two_node_thread_validates_into_typed_copy() {
    let export = validate(&json!([thread()])).expect("export should validate");

    assert_eq!(export.len(), 1);
    let thread = &export.threads()[0];
    assert_eq!(thread.title, "Greeting");
    assert_eq!(thread.mapping.len(), 2);
    assert!(thread.mapping["a"].is_placeholder());

    let message = thread.mapping["b"]
        .message
        .as_ref()
        .expect("node b should carry a message");
    assert_eq!(message.author.role, Role::User);
    assert_eq!(message.recipient, Recipient::All);
    assert_eq!(message.content.content_type(), "text");
    match &message.content {
        Content::Text(text) => {
            assert_eq!(text.parts, vec![MessagePart::Text("hi".to_string())]);
        }
        other => panic!("expected text content, got {other:?}"),
    }
}

#[test]
fn typed_copy_round_trips() {
    let document = json!([thread()]);
    let export = validate(&document).expect("export should validate");

    let encoded = serde_json::to_value(&export).expect("export should serialize");
    assert_eq!(encoded, document);

    let again: ChatExport = validate(&encoded).expect("re-encoded export should validate");
    assert_eq!(again, export);
}

#[test]
fn unknown_field_on_closed_variant_is_rejected_at_its_path() {
    let document = json!([thread_with_content(json!({
        "content_type": "code",
        "language": "python",
        "response_format_name": null,
        "text": "print(1)",
        "extra": 1
    }))]);

    assert_eq!(
        issue_paths(&document),
        vec![(
            IssueKind::UnrecognizedKey,
            "[0].mapping.b.message.content.extra".to_string()
        )]
    );
    let failure = validate(&document).expect_err("closed variant must reject extra field");
    assert_eq!(
        failure.issues[0].message,
        "Unrecognized key in object: 'extra'"
    );
}

#[test]
fn unknown_field_on_text_content_is_rejected_at_its_path() {
    let document = json!([thread_with_content(json!({
        "content_type": "text",
        "parts": ["hi"],
        "surprise": true
    }))]);

    assert_eq!(
        issue_paths(&document),
        vec![(
            IssueKind::UnrecognizedKey,
            "[0].mapping.b.message.content.surprise".to_string()
        )]
    );
    let failure = validate(&document).expect_err("text content must reject extra field");
    assert_eq!(failure.issue_count(), 1);
    assert_eq!(
        failure.diagnostics[0].path,
        "[0].mapping.b.message.content.surprise"
    );
}

#[test]
fn loose_variant_tolerates_unknown_fields() {
    let document = json!([thread_with_content(json!({
        "content_type": "audio_transcription",
        "text": "hello",
        "decoding_id": null,
        "start_timestamp": 1.5
    }))]);

    assert!(check_export(&document).is_empty());
    validate(&document).expect("loose variant should validate");
}

#[test]
fn unknown_discriminator_is_reported_on_the_tag() {
    let document = json!([thread_with_content(json!({"content_type": "hologram"}))]);

    let issues = check_export(&document);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::InvalidDiscriminator);
    assert_eq!(
        issues[0].rendered_path(),
        "[0].mapping.b.message.content.content_type"
    );
    assert!(issues[0].message.starts_with("Invalid discriminator value. Expected 'text' | 'code'"));
}

#[test]
fn diagnostics_are_capped_while_issues_are_kept() {
    let threads: Vec<Value> = (0..15)
        .map(|_| {
            let mut thread = thread();
            thread
                .as_object_mut()
                .expect("thread fixture is an object")
                .remove("title");
            thread
        })
        .collect();
    let document = Value::Array(threads);

    let failure = validate(&document).expect_err("missing titles must fail");

    assert_eq!(failure.issues.len(), 15);
    assert_eq!(failure.diagnostics.len(), DIAGNOSTIC_LIMIT);
    assert_eq!(failure.diagnostics[0].message, "Required");
    assert_eq!(failure.diagnostics[0].path, "[0].title");
    assert_eq!(failure.diagnostics[9].path, "[9].title");
    assert!(failure.diagnostics[0].preview.ends_with("..."));
    assert_eq!(failure.diagnostics[0].preview.chars().count(), 103);
    assert!(failure.to_string().starts_with("parsing failed: 15 structural issue(s)"));
}

#[test]
fn nullable_and_optional_are_distinct() {
    let mut missing_nullable = thread();
    missing_nullable
        .as_object_mut()
        .expect("thread fixture is an object")
        .remove("conversation_template_id");

    let mut null_optional = thread();
    null_optional["blocked_urls"] = Value::Null;

    let mut optional_nullable = thread();
    optional_nullable["is_do_not_remember"] = Value::Null;

    assert_eq!(
        issue_paths(&json!([missing_nullable, null_optional, optional_nullable])),
        vec![
            (IssueKind::Required, "[0].conversation_template_id".to_string()),
            (IssueKind::InvalidType, "[1].blocked_urls".to_string()),
        ]
    );
}

#[test]
fn opaque_fields_may_be_absent_or_any_value() {
    let mut document = thread();
    let object = document.as_object_mut().expect("thread fixture is an object");
    object.remove("moderation_results");
    object.insert("current_node".to_string(), json!({"anything": [1, "two"]}));

    let export = validate(&json!([document])).expect("opaque fields should accept anything");

    assert!(export.threads()[0].moderation_results.is_none());
}

#[test]
fn unknown_recipient_is_an_enum_issue() {
    let mut document = thread();
    document["mapping"]["b"]["message"]["recipient"] = json!("email");

    let issues = check_export(&json!([document]));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::InvalidEnumValue);
    assert_eq!(issues[0].rendered_path(), "[0].mapping.b.message.recipient");
    assert!(issues[0].message.ends_with("received 'email'"));
}

#[test]
fn unknown_metadata_key_is_rejected() {
    let mut document = thread();
    document["mapping"]["b"]["message"]["metadata"] = json!({"is_complete": true, "mystery": 1});

    assert_eq!(
        issue_paths(&json!([document])),
        vec![(
            IssueKind::UnrecognizedKey,
            "[0].mapping.b.message.metadata.mystery".to_string()
        )]
    );
}

#[test]
fn non_array_document_fails_at_root() {
    let failure = validate(&json!({"not": "an export"})).expect_err("object root must fail");

    assert_eq!(failure.issues.len(), 1);
    assert_eq!(failure.issues[0].kind, IssueKind::InvalidType);
    assert_eq!(failure.diagnostics[0].path, ".");
    assert_eq!(
        failure.diagnostics[0].message,
        "Expected array, received object"
    );
}

#[test]
fn issues_follow_schema_order() {
    let mut document = thread();
    let object = document.as_object_mut().expect("thread fixture is an object");
    object.insert("zz_unknown".to_string(), json!(true));
    object.insert("is_archived".to_string(), json!("no"));
    object.remove("id");

    assert_eq!(
        issue_paths(&json!([document])),
        vec![
            (IssueKind::Required, "[0].id".to_string()),
            (IssueKind::InvalidType, "[0].is_archived".to_string()),
            (IssueKind::UnrecognizedKey, "[0].zz_unknown".to_string()),
        ]
    );
}
