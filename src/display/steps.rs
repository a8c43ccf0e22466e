//! Step catalog display formatting

use crate::models::StepDefinition;

/// Format the catalog as a table of index, title, kind and options
pub fn format_step_list(steps: &[StepDefinition]) -> String {
    let title_width = steps
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>2}  {:<title_width$}  {:<7}  {}\n",
        "#",
        "Title",
        "Type",
        "Options",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->2}  {:-<title_width$}  {:-<7}  {:-<20}\n",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for (index, step) in steps.iter().enumerate() {
        let options = match step.options {
            Some(options) => options.join(" | "),
            None => step
                .required_fields()
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", "),
        };
        output.push_str(&format!(
            "{:>2}  {:<title_width$}  {:<7}  {}\n",
            index + 1,
            step.title,
            step.kind.to_string(),
            options,
            title_width = title_width,
        ));
    }

    output
}
