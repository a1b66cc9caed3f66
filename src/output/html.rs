//! HTML reminder body for suspended tasks
//!
//! The rendered document is the reminder artifact: a mail-ready body plus the
//! recipient list, written to a file for whatever delivery channel the site
//! admins use.

use crate::output::escape_html;
use crate::output::suspended::SuspendedTasks;

const STYLE: &str = "\
table { width: 100%; border-collapse: collapse; font-family: Arial, sans-serif; }
th, td { padding: 8px; text-align: left; }
th { background-color: #f2f2f2; font-weight: bold; }
tr:nth-child(even) { background-color: #f9f9f9; }";

/// Render the full reminder document
pub fn reminder_body(tasks: &SuspendedTasks) -> String {
    let recipients = tasks.recipients().join("; ");

    let mut body = String::new();
    body.push_str("<html>\n<head>\n<style>\n");
    body.push_str(STYLE);
    body.push_str("\n</style>\n</head>\n<body>\n");

    body.push_str(&format!(
        "<p>To: {}</p>\n<p>Subject: ACTION REQUIRED - TABLEAU TASKS SUSPENDED</p>\n",
        escape_html(&recipients)
    ));
    body.push_str(
        "<p>You're receiving this reminder because you own a task that has been \
         suspended on the Tableau server due to consecutive failures. Please make \
         any corrections required and resume the task or delete it.</p>\n",
    );

    body.push_str(&format!(
        "<h2>Suspended tasks report ({} tasks)</h2>\n",
        tasks.total()
    ));

    body.push_str(&format!(
        "<h3>Extract refresh tasks ({})</h3>\n{}\n",
        tasks.extracts.len(),
        tasks.extracts.to_html_table()
    ));
    body.push_str(&format!(
        "<h3>Flow tasks ({})</h3>\n{}\n",
        tasks.flows.len(),
        tasks.flows.to_html_table()
    ));
    body.push_str(&format!(
        "<h3>Subscription tasks ({})</h3>\n{}\n",
        tasks.subscriptions.len(),
        tasks.subscriptions.to_html_table()
    ));

    body.push_str("</body>\n</html>\n");
    body
}
