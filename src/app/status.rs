use initiative_wizard::draft::DraftStore;
use initiative_wizard::ui::style as ui;
use initiative_wizard::wizard::{StepNumber, StepStatus, ValidationReport};

pub fn render_status(store: &DraftStore) -> String {
    let calculator = store.calculator();
    let form = store.form();
    let current = store.current_step();
    let required = calculator.required_steps_progress();

    let title = if form.title.trim().is_empty() {
        ui::dim("(untitled)")
    } else {
        ui::value(&form.title)
    };

    let mut lines = vec![
        format!("◆ {}", ui::header("Initiative draft")),
        String::new(),
        format!("  Title      {title}"),
        format!("  Step       {current}/{} {}", StepNumber::LAST, current.label()),
        format!("  Progress   {}%", calculator.overall_progress()),
        format!(
            "  Required   {}/{} steps{}",
            required.completed,
            required.total,
            if required.is_ready() {
                format!(" {}", ui::success("ready to submit"))
            } else {
                String::new()
            }
        ),
        String::new(),
    ];

    for step in StepNumber::ALL {
        let status = calculator.step_status(step);
        let marker = if step == current { "›" } else { " " };
        let label = format!("{step} {:<9}", step.label());
        lines.push(format!(
            "{marker} {} {} {:>3}%  {}",
            status_symbol(status),
            label,
            calculator.step_progress(step),
            ui::dim(status),
        ));
    }

    lines.join("\n")
}

pub fn render_report(report: &ValidationReport) -> String {
    if report.is_valid() {
        return format!("{} Every field is valid", ui::success("✓"));
    }

    let mut lines: Vec<String> = report
        .errors
        .iter()
        .map(|error| {
            format!(
                "  {} {}: {}",
                ui::error("✗"),
                error.field.label(),
                error.message
            )
        })
        .collect();
    lines.insert(
        0,
        format!("{} {} problem(s) found", ui::error("!"), report.errors.len()),
    );
    lines.join("\n")
}

fn status_symbol(status: StepStatus) -> String {
    match status {
        StepStatus::Completed => ui::success("✓"),
        StepStatus::Pending => ui::yellow("!"),
        StepStatus::Optional => ui::accent("○"),
        StepStatus::Neutral => ui::dim("·"),
    }
}
