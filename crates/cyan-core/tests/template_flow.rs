use cyan_core::{orchestrator, CyanProfile, Field, GlobType, ScriptedPrompter};

fn base_answers() -> Vec<&'static str> {
    vec![
        "alice",
        "my-template",
        "desc",
        "a@b.com",
        "no",
        "https://p.com",
        "https://s.com",
    ]
}

#[test]
fn test_end_to_end_vars_match_inputs() {
    let mut prompter = ScriptedPrompter::new(base_answers());
    let descriptor = orchestrator::run(&CyanProfile, &mut prompter).unwrap();

    let vars = &descriptor.processors[0].config.vars;
    assert_eq!(vars["username"], "alice");
    assert_eq!(vars["name"], "my-template");
    assert_eq!(vars["desc"], "desc");
    assert_eq!(vars["email"], "a@b.com");
    assert_eq!(vars["tags"], "[]");
    assert_eq!(vars["project"], "https://p.com");
    assert_eq!(vars["source"], "https://s.com");

    assert!(descriptor.plugins.is_empty());
    assert!(prompter.rejections().is_empty());
    assert_eq!(prompter.remaining(), 0);
}

#[test]
fn test_end_to_end_with_tags() {
    let mut prompter = ScriptedPrompter::new([
        "alice",
        "my-template",
        "",
        "a@b.com",
        "yes",
        "a",
        "yes",
        "b",
        "no",
        "https://p.com",
        "https://s.com",
    ]);
    let answers = orchestrator::collect_answers(&mut prompter).unwrap();

    assert_eq!(answers.tags, vec!["a", "b"]);
    assert_eq!(answers.description, "");

    let descriptor = answers.to_descriptor(&CyanProfile).unwrap();
    assert_eq!(descriptor.processors[0].config.vars["tags"], r#"["a","b"]"#);
}

#[test]
fn test_invalid_answers_are_reasked() {
    let mut prompter = ScriptedPrompter::new([
        "Alice",
        "alice",
        "my--template",
        "my-template",
        "desc",
        "not-an-email",
        "a@b.com",
        "yes",
        "-tag",
        "tag",
        "no",
        "example.com",
        "https://p.com",
        "https://s.com",
    ]);
    let answers = orchestrator::collect_answers(&mut prompter).unwrap();

    assert_eq!(answers.username, "alice");
    assert_eq!(answers.name, "my-template");
    assert_eq!(answers.email, "a@b.com");
    assert_eq!(answers.tags, vec!["tag"]);
    assert_eq!(answers.project, "https://p.com");

    let rejections = prompter.rejections();
    assert_eq!(rejections.len(), 5);
    assert!(rejections[0].starts_with("Username can only contain"));
    assert!(rejections[1].starts_with("Template can only contain"));
    assert_eq!(rejections[2], "Invalid email");
    assert!(rejections[3].starts_with("Tag can only contain"));
    assert_eq!(rejections[4], "Invalid URL");
}

#[test]
fn test_abandoned_session_is_an_error() {
    let mut prompter = ScriptedPrompter::new(["alice", "my-template"]);
    assert!(orchestrator::run(&CyanProfile, &mut prompter).is_err());

    let last = prompter.asked().last().unwrap();
    assert_eq!(last.field, Field::Description);
}

#[test]
fn test_descriptor_json_for_render_host() {
    let mut prompter = ScriptedPrompter::new(base_answers());
    let descriptor = orchestrator::run(&CyanProfile, &mut prompter).unwrap();

    let files = &descriptor.processors[0].files;
    assert_eq!(files[0].kind, GlobType::Template);
    assert_eq!(files[1].kind, GlobType::Copy);

    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        json["processors"][0]["files"][1],
        serde_json::json!({
            "type": "copy",
            "exclude": ["cyan.yaml"],
            "glob": "**/*",
            "root": "template"
        })
    );
    assert_eq!(json["processors"][0]["config"]["vars"]["tags"], "[]");
}
