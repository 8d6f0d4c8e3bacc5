use taskmover_core::{
    apply_tasks_to_template, extract_uncompleted_tasks, TaskMapping, DEFAULT_TEMPLATE,
    TASK_PLACEHOLDER,
};

fn mapping(entries: Vec<(&str, Vec<&str>)>) -> TaskMapping {
    entries
        .into_iter()
        .map(|(heading, lines)| {
            (
                heading.to_string(),
                lines.iter().map(|line| line.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[test]
fn tasks_replace_placeholder_under_matching_heading() {
    let tasks = mapping(vec![("# H", vec!["- [ ] a", "- [ ] b"])]);

    let output = apply_tasks_to_template("# H\n<<tasks>>\n", &tasks);

    assert_eq!(output, "# H\n- [ ] a\n- [ ] b\n");
}

#[test]
fn empty_bucket_yields_fallback_text() {
    let tasks = mapping(vec![("# H", vec![])]);

    let output = apply_tasks_to_template("# H\n<<tasks>>\n", &tasks);

    assert_eq!(output, "# H\nNo tasks from yesterday:)\n");
}

#[test]
fn absent_heading_yields_fallback_text() {
    let output = apply_tasks_to_template("# H\n<<tasks>>\n", &TaskMapping::new());

    assert_eq!(output, "# H\nNo tasks from yesterday:)\n");
}

#[test]
fn empty_heading_bucket_is_never_used_as_anchor() {
    let tasks = mapping(vec![("", vec!["- [ ] orphan"])]);

    let output = apply_tasks_to_template("<<tasks>>\n", &tasks);

    assert_eq!(output, "No tasks from yesterday:)\n");
}

#[test]
fn each_heading_fills_the_first_placeholder_after_it() {
    let tasks = mapping(vec![("## Work", vec!["- [ ] w"]), ("## Home", vec!["- [ ] h"])]);
    let template = "# Day\n## Home\n<<tasks>>\n## Work\n<<tasks>>\n## Extra\n<<tasks>>\n";

    let output = apply_tasks_to_template(template, &tasks);

    assert_eq!(
        output,
        "# Day\n## Home\n- [ ] h\n## Work\n- [ ] w\n## Extra\nNo tasks from yesterday:)\n"
    );
}

#[test]
fn heading_anchor_uses_first_literal_occurrence() {
    let tasks = mapping(vec![("# A", vec!["- [ ] x"])]);
    let template = "# A\nintro\n# A\n<<tasks>>\ntail\n";

    let output = apply_tasks_to_template(template, &tasks);

    assert_eq!(output, "# A\nintro\n# A\n- [ ] x\ntail\n");
}

#[test]
fn missing_heading_leaves_text_untouched_apart_from_fallback() {
    let tasks = mapping(vec![("# Elsewhere", vec!["- [ ] x"])]);

    let output = apply_tasks_to_template("# Here\nbody\n", &tasks);

    assert_eq!(output, "# Here\nbody\n");
}

#[test]
fn no_placeholder_survives_application() {
    let tasks = mapping(vec![("# A", vec!["- [ ] x"]), ("# B", vec![])]);
    let template = "<<tasks>><<tasks>>\n# A\n<<tasks>><<tasks>>\n# B\n# C\n<<tasks>>";

    let output = apply_tasks_to_template(template, &tasks);

    assert!(!output.contains(TASK_PLACEHOLDER));
    assert_eq!(output.matches("- [ ] x").count(), 1);
}

#[test]
fn extracted_tasks_round_trip_into_matching_template() {
    let note = "# Daily\n## Work\n- [ ] review PR\n- [x] standup\n  - [ ] write notes\n## Home\n- [ ] groceries\n";
    let template = "# Daily\n## Work\n<<tasks>>\n## Home\n<<tasks>>\n";

    let output = apply_tasks_to_template(template, &extract_uncompleted_tasks(note));

    assert_eq!(
        output,
        "# Daily\n## Work\n- [ ] review PR\n- [ ] write notes\n## Home\n- [ ] groceries\n"
    );
}

#[test]
fn default_template_receives_tasks_from_matching_heading() {
    let note = "## Tasks from Yesterday\n- [ ] carry me\n";

    let output = apply_tasks_to_template(DEFAULT_TEMPLATE, &extract_uncompleted_tasks(note));

    assert_eq!(
        output,
        "# Daily Note\n\n## Tasks from Yesterday\n- [ ] carry me\n\n## Today's Tasks\n"
    );
}
