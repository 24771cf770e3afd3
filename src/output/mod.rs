pub mod formatter;

pub use formatter::{
    format_average_report, format_days, format_goal_report, format_grade, format_mention,
    format_opportunity_table, format_opportunity_tsv, format_quiz_result, format_record,
    format_scholarship_table, format_scholarship_tsv, should_use_colors,
};
