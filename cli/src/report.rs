use qccalc_core::{format_hours, parse_duration, BonusReport, StatsReport};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct BonusRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Rate")]
    multiplier: String,
    #[tabled(rename = "Bonus")]
    amount: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Check time")]
    check_time: String,
}

fn render(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

pub fn bonus_table(report: &BonusReport) -> String {
    let mut rows: Vec<BonusRow> = report
        .groups
        .iter()
        .map(|line| BonusRow {
            group: line.group.to_string(),
            count: line.count.to_string(),
            multiplier: format!("x{}", line.multiplier),
            amount: line.amount.to_string(),
        })
        .collect();

    rows.push(BonusRow {
        group: "Total".to_string(),
        count: String::new(),
        multiplier: String::new(),
        amount: report.total_amount.to_string(),
    });

    render(Table::new(rows))
}

pub fn stats_table(report: &StatsReport) -> String {
    let rows: Vec<StatsRow> = report
        .groups
        .iter()
        .map(|line| StatsRow {
            group: line.group.to_string(),
            count: line.count.to_string(),
            check_time: format_hours(line.check_time),
        })
        .collect();

    render(Table::new(rows))
}

pub fn monthly_summary(report: &StatsReport) -> String {
    let monthly = &report.monthly;
    format!(
        "Month ({} days): {} items in {} ({:.2} items/h)",
        report.days_in_month,
        monthly.total_count,
        format_hours(monthly.total_time),
        monthly.average_speed
    )
}

pub fn duration_summary(input: &str) -> Option<String> {
    let hours = parse_duration(input)?;
    Some(format!("{} = {:.4}h ({})", input, hours, format_hours(hours)))
}
