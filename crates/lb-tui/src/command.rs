//! Command system for the leadboard TUI.
//!
//! Two front ends feed the same [`AppCommand`] set:
//! - **Command mode**: `:` prefixed text commands typed interactively.
//! - **JSON pipe**: structured commands read from stdin in headless mode.
//!
//! Query commands return serialized board state as JSON strings.

use lb_core::format::{format_currency, format_thousands};
use lb_core::types::STAGES;

use crate::app::{App, QUICK_ACTIONS};

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    Left,
    Right,
    Up,
    Down,
    Column(usize),

    // Add Lead modal
    OpenAddLead,
    CloseModal,

    // Placeholders, no effect yet
    Contact,
    View,
    QuickAction(String),

    // Queries
    QueryState,
    QueryBoard,
    QueryStats,

    // System
    Help,
    Quit,
}

fn quick_action(name: &str) -> Option<AppCommand> {
    QUICK_ACTIONS
        .iter()
        .any(|(id, _, _)| *id == name)
        .then(|| AppCommand::QuickAction(name.to_string()))
}

// ---------------------------------------------------------------------------
// Text command parser  (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
///
/// Examples: `:column 3`, `:add`, `:close`, `:query stats`, `:action analytics`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim().strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(str::trim);

    match verb {
        "left" | "h" => Some(AppCommand::Left),
        "right" | "l" => Some(AppCommand::Right),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "column" | "col" => Some(AppCommand::Column(arg?.parse().ok()?)),
        "add" | "add_lead" => Some(AppCommand::OpenAddLead),
        "close" => Some(AppCommand::CloseModal),
        "contact" => Some(AppCommand::Contact),
        "view" => Some(AppCommand::View),
        "action" => quick_action(arg?),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "board" => Some(AppCommand::QueryBoard),
            "stats" => Some(AppCommand::QueryStats),
            _ => None,
        },
        "help" | "?" => Some(AppCommand::Help),
        "quit" | "q" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command from the headless pipe.
///
/// Expected format: `{"cmd":"column","args":[2]}` or `{"cmd":"query_stats"}`.
pub fn parse_json_command(json: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(json).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize = |idx: usize| -> Option<usize> {
        args?.as_array()?.get(idx)?.as_u64().and_then(|n| usize::try_from(n).ok())
    };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "left" => Some(AppCommand::Left),
        "right" => Some(AppCommand::Right),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "column" => Some(AppCommand::Column(arg_usize(0)?)),
        "add_lead" => Some(AppCommand::OpenAddLead),
        "close_modal" => Some(AppCommand::CloseModal),
        "contact" => Some(AppCommand::Contact),
        "view" => Some(AppCommand::View),
        "action" => quick_action(arg_str(0)?),
        "query_state" => Some(AppCommand::QueryState),
        "query_board" => Some(AppCommand::QueryBoard),
        "query_stats" => Some(AppCommand::QueryStats),
        "help" => Some(AppCommand::Help),
        "quit" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` for query commands, `None` for everything else.
/// While the Add Lead modal is open only `CloseModal`, queries and `Quit`
/// take effect.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    if app.show_add_modal
        && !matches!(
            cmd,
            AppCommand::CloseModal
                | AppCommand::QueryState
                | AppCommand::QueryBoard
                | AppCommand::QueryStats
                | AppCommand::Quit
        )
    {
        tracing::debug!(?cmd, "ignored while add-lead modal is open");
        return None;
    }

    match cmd {
        // -- Navigation -----------------------------------------------------
        AppCommand::Left => app.move_left(),
        AppCommand::Right => app.move_right(),
        AppCommand::Up => app.move_up(),
        AppCommand::Down => app.move_down(),
        AppCommand::Column(idx) => app.select_column(idx),

        // -- Modal ----------------------------------------------------------
        AppCommand::OpenAddLead => app.open_add_lead(),
        AppCommand::CloseModal => app.close_add_lead(),

        // -- Placeholders ---------------------------------------------------
        AppCommand::Contact => {
            let lead = selected_lead_id(app);
            tracing::debug!(lead = lead.as_deref(), "contact action not wired");
        }
        AppCommand::View => {
            let lead = selected_lead_id(app);
            tracing::debug!(lead = lead.as_deref(), "view action not wired");
        }
        AppCommand::QuickAction(name) => {
            tracing::debug!(action = %name, "quick action not wired");
        }

        // -- Queries --------------------------------------------------------
        AppCommand::QueryState => return Some(query_state(app).to_string()),
        AppCommand::QueryBoard => return Some(query_board(app).to_string()),
        AppCommand::QueryStats => return Some(query_stats(app).to_string()),

        // -- System ---------------------------------------------------------
        AppCommand::Help => app.show_help = !app.show_help,
        AppCommand::Quit => app.should_quit = true,
    }
    None
}

fn selected_lead_id(app: &App) -> Option<String> {
    let view = app.view();
    view.columns
        .get(app.column)?
        .leads
        .get(app.selected_card)
        .map(|l| l.id.clone())
}

// ---------------------------------------------------------------------------
// Serialization helpers
// ---------------------------------------------------------------------------

fn query_state(app: &App) -> serde_json::Value {
    serde_json::json!({
        "column": app.column,
        "column_label": app.column_label(),
        "selected_card": app.selected_card,
        "selected_lead": selected_lead_id(app),
        "add_modal_open": app.show_add_modal,
        "help_open": app.show_help,
        "leads": app.store.len(),
    })
}

fn query_board(app: &App) -> serde_json::Value {
    let view = app.view();
    serde_json::json!(view
        .columns
        .iter()
        .map(|c| serde_json::json!({
            "stage": c.definition.stage.as_str(),
            "label": c.definition.label,
            "count": c.len(),
            "leads": c.leads,
        }))
        .collect::<Vec<_>>())
}

fn query_stats(app: &App) -> serde_json::Value {
    let stats = app.view().stats;
    let symbol = app.board.currency_symbol.as_str();
    serde_json::json!({
        "total": stats.total,
        "qualified": stats.qualified,
        "totalValue": stats.total_value,
        "avgScore": stats.avg_score,
        "display": {
            "pipelineValue": format_thousands(stats.total_value, symbol),
            "pipelineValueFull": format_currency(stats.total_value, symbol),
        },
        "stages": STAGES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Text parser --------------------------------------------------------

    #[test]
    fn parse_navigation_commands() {
        assert_eq!(parse_command(":left"), Some(AppCommand::Left));
        assert_eq!(parse_command(":h"), Some(AppCommand::Left));
        assert_eq!(parse_command(":right"), Some(AppCommand::Right));
        assert_eq!(parse_command(":up"), Some(AppCommand::Up));
        assert_eq!(parse_command(":j"), Some(AppCommand::Down));
    }

    #[test]
    fn parse_column_command() {
        assert_eq!(parse_command(":column 3"), Some(AppCommand::Column(3)));
        assert_eq!(parse_command(":col 0"), Some(AppCommand::Column(0)));
        assert_eq!(parse_command(":column"), None);
        assert_eq!(parse_command(":column abc"), None);
    }

    #[test]
    fn parse_modal_commands() {
        assert_eq!(parse_command(":add"), Some(AppCommand::OpenAddLead));
        assert_eq!(parse_command(":add_lead"), Some(AppCommand::OpenAddLead));
        assert_eq!(parse_command(":close"), Some(AppCommand::CloseModal));
    }

    #[test]
    fn parse_action_commands() {
        assert_eq!(
            parse_command(":action analytics"),
            Some(AppCommand::QuickAction("analytics".into()))
        );
        assert_eq!(parse_command(":action launch_rockets"), None);
        assert_eq!(parse_command(":action"), None);
        assert_eq!(parse_command(":contact"), Some(AppCommand::Contact));
        assert_eq!(parse_command(":view"), Some(AppCommand::View));
    }

    #[test]
    fn parse_query_commands() {
        assert_eq!(parse_command(":query state"), Some(AppCommand::QueryState));
        assert_eq!(parse_command(":query board"), Some(AppCommand::QueryBoard));
        assert_eq!(parse_command(":query stats"), Some(AppCommand::QueryStats));
        assert_eq!(parse_command(":query nothing"), None);
    }

    #[test]
    fn parse_no_colon_prefix() {
        assert_eq!(parse_command("quit"), None);
    }

    #[test]
    fn parse_whitespace_handling() {
        assert_eq!(parse_command("  :column 2  "), Some(AppCommand::Column(2)));
        assert_eq!(parse_command(":quit"), Some(AppCommand::Quit));
    }

    // -- JSON parser --------------------------------------------------------

    #[test]
    fn parse_json_column() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"column","args":[4]}"#),
            Some(AppCommand::Column(4))
        );
        assert_eq!(parse_json_command(r#"{"cmd":"column"}"#), None);
    }

    #[test]
    fn parse_json_modal_and_queries() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"add_lead"}"#),
            Some(AppCommand::OpenAddLead)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"close_modal"}"#),
            Some(AppCommand::CloseModal)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"query_stats"}"#),
            Some(AppCommand::QueryStats)
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"action","args":["follow_ups"]}"#),
            Some(AppCommand::QuickAction("follow_ups".into()))
        );
    }

    #[test]
    fn parse_json_invalid() {
        assert_eq!(parse_json_command("not json"), None);
        assert_eq!(parse_json_command(r#"{"nocmd":1}"#), None);
        assert_eq!(parse_json_command(r#"{"cmd":"explode"}"#), None);
    }

    // -- Execution ----------------------------------------------------------

    #[test]
    fn execute_column_navigation() {
        let mut app = App::demo();
        execute_command(&mut app, AppCommand::Column(3));
        assert_eq!(app.column, 3);
        execute_command(&mut app, AppCommand::Column(9));
        assert_eq!(app.column, 3);
        execute_command(&mut app, AppCommand::Right);
        execute_command(&mut app, AppCommand::Right);
        assert_eq!(app.column, 4);
        execute_command(&mut app, AppCommand::Left);
        assert_eq!(app.column, 3);
    }

    #[test]
    fn execute_modal_open_close() {
        let mut app = App::demo();
        let before = app.store.clone();

        execute_command(&mut app, AppCommand::OpenAddLead);
        assert!(app.show_add_modal);
        execute_command(&mut app, AppCommand::CloseModal);
        assert!(!app.show_add_modal);
        assert_eq!(app.store, before);
    }

    #[test]
    fn execute_ignores_navigation_while_modal_open() {
        let mut app = App::demo();
        execute_command(&mut app, AppCommand::OpenAddLead);
        execute_command(&mut app, AppCommand::Right);
        execute_command(&mut app, AppCommand::Help);
        assert_eq!(app.column, 0);
        assert!(!app.show_help);
        assert!(execute_command(&mut app, AppCommand::QueryState).is_some());
    }

    #[test]
    fn execute_placeholders_change_nothing() {
        let mut app = App::demo();
        app.select_column(2);
        assert_eq!(execute_command(&mut app, AppCommand::Contact), None);
        assert_eq!(execute_command(&mut app, AppCommand::View), None);
        assert_eq!(
            execute_command(&mut app, AppCommand::QuickAction("analytics".into())),
            None
        );
        assert_eq!(app.column, 2);
        assert!(!app.show_add_modal);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn execute_query_state() {
        let mut app = App::demo();
        app.select_column(2);
        let json = execute_command(&mut app, AppCommand::QueryState).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["column"], 2);
        assert_eq!(v["column_label"], "Qualified");
        assert_eq!(v["selected_lead"], "1");
        assert_eq!(v["add_modal_open"], false);
        assert_eq!(v["leads"], 3);
    }

    #[test]
    fn execute_query_board() {
        let mut app = App::demo();
        let json = execute_command(&mut app, AppCommand::QueryBoard).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let columns = v.as_array().unwrap();
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[0]["label"], "New Leads");
        assert_eq!(columns[0]["count"], 0);
        assert_eq!(columns[3]["stage"], "negotiating");
        assert_eq!(columns[3]["leads"][0]["name"], "Sarah Johnson");
    }

    #[test]
    fn execute_query_stats() {
        let mut app = App::demo();
        let json = execute_command(&mut app, AppCommand::QueryStats).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["total"], 3);
        assert_eq!(v["qualified"], 2);
        assert_eq!(v["totalValue"], 1_055_000.0);
        assert_eq!(v["avgScore"], 81);
        assert_eq!(v["display"]["pipelineValue"], "$1055K");
        assert_eq!(v["display"]["pipelineValueFull"], "$1,055,000");
    }

    #[test]
    fn execute_help_toggles_and_quit() {
        let mut app = App::demo();
        execute_command(&mut app, AppCommand::Help);
        assert!(app.show_help);
        execute_command(&mut app, AppCommand::Help);
        assert!(!app.show_help);
        execute_command(&mut app, AppCommand::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn roundtrip_text_query() {
        let mut app = App::demo();
        let cmd = parse_command(":query stats").unwrap();
        assert!(execute_command(&mut app, cmd).is_some());
    }
}
