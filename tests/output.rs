use declutter::output::{format_human, HumanOutput};

#[test]
fn format_human_renders_sections_in_order() {
    let mut output = HumanOutput::new("Added task 42");
    output.push_summary("Group", "Mindfulness");
    output.push_detail("text: Call mom");
    output.push_warning("close to your daily limit");
    output.push_next_step("declutter list");

    let rendered = format_human(&output);
    let expected = "Added task 42\n\nSummary:\n- Group: Mindfulness\n\nDetails:\n- text: Call mom\n\nWarnings:\n- close to your daily limit\n\nNext steps:\n- declutter list";
    assert_eq!(rendered, expected);
}
