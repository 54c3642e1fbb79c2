use crate::context::Context;
use crate::schema::Session;
use crate::wizard::collect::Collector;
use anyhow::Result;
use tracing::{debug, info};

/// Mutation applied to the session with a collected value
pub type Apply<T> = fn(&mut Session, T);

/// What a numbered menu option does when selected
pub enum Action {
    /// Apply a fixed change, typically enabling or disabling a component
    Set {
        notice: &'static str,
        apply: fn(&mut Session),
    },
    /// Lowercased free text; empty input applies `default` when present
    Text {
        prompt: &'static str,
        default: Option<&'static str>,
        apply: Apply<String>,
    },
    /// Free text that keeps its case (credentials, images, paths)
    Verbatim {
        prompt: &'static str,
        masked: bool,
        apply: Apply<String>,
    },
    /// Whole number; unparseable input leaves the setting unchanged
    Integer {
        prompt: &'static str,
        default: Option<i64>,
        apply: Apply<i64>,
    },
    /// One value per line until an empty line
    List {
        prompt: &'static str,
        apply: Apply<Vec<String>>,
    },
    /// One of a fixed set of options
    Choice {
        prompt: &'static str,
        options: &'static [&'static str],
        default: Option<&'static str>,
        apply: Apply<String>,
    },
    /// yes/no question
    Confirm {
        prompt: &'static str,
        apply: Apply<bool>,
    },
    /// Nested menu
    Submenu(Menu),
}

/// One numbered option of a menu
pub struct Entry {
    pub label: &'static str,
    /// Dotted path of the setting this option changes, used for logging
    pub key: &'static str,
    pub action: Action,
}

impl Entry {
    fn invoke(&self, ctx: &Context, session: &mut Session) -> Result<()> {
        let collector = Collector::new(ctx);

        match &self.action {
            Action::Set { notice, apply } => {
                apply(session);
                ctx.output.notice(notice);
                info!(setting = self.key, "setting changed");
            }
            Action::Text {
                prompt,
                default,
                apply,
            } => {
                let answer = collector.scalar(&with_default(prompt, *default))?;
                let value = match (answer.is_empty(), default) {
                    (true, Some(default)) => default.to_string(),
                    _ => answer,
                };
                info!(setting = self.key, value = %value, "setting changed");
                apply(session, value);
            }
            Action::Verbatim {
                prompt,
                masked,
                apply,
            } => {
                let value = collector.verbatim(&format!("{}: ", prompt), *masked)?;
                if *masked {
                    info!(setting = self.key, value = "********", "setting changed");
                } else {
                    info!(setting = self.key, value = %value, "setting changed");
                }
                apply(session, value);
            }
            Action::Integer {
                prompt,
                default,
                apply,
            } => {
                let default_text = default.map(|d| d.to_string());
                let prompt = with_default(prompt, default_text.as_deref());
                match collector.integer(&prompt, *default)? {
                    Some(value) => {
                        info!(setting = self.key, value, "setting changed");
                        apply(session, value);
                    }
                    None => ctx.output.warning("Not a number, value left unchanged"),
                }
            }
            Action::List { prompt, apply } => {
                let values = collector.list(prompt)?;
                info!(setting = self.key, value = %values.join(", "), "setting changed");
                apply(session, values);
            }
            Action::Choice {
                prompt,
                options,
                default,
                apply,
            } => {
                let prompt = format!("{} [{}]", prompt, options.join("|"));
                let value = collector.choice(&with_default(&prompt, *default), options, *default)?;
                info!(setting = self.key, value = %value, "setting changed");
                apply(session, value);
            }
            Action::Confirm { prompt, apply } => {
                let value = collector.confirm(&format!("{} (yes/no): ", prompt))?;
                info!(setting = self.key, value, "setting changed");
                apply(session, value);
            }
            Action::Submenu(menu) => menu.run(ctx, session)?,
        }

        Ok(())
    }
}

fn with_default(prompt: &str, default: Option<&str>) -> String {
    match default {
        Some(default) => format!("{} [default: {}]: ", prompt, default),
        None => format!("{}: ", prompt),
    }
}

/// Parse a menu selection; anything that is not a positive integer is `None`
pub fn parse_selection(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// A numbered menu bound to one group of settings.
///
/// Options are numbered from 1 in the order they were added; the number
/// after the last option is reserved for "done", which returns to the
/// parent menu.
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<Entry>,
    pub done_label: &'static str,
}

impl Menu {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
            done_label: "Save and Exit",
        }
    }

    /// Override the label of the reserved "done" option
    pub fn done(mut self, label: &'static str) -> Self {
        self.done_label = label;
        self
    }

    pub fn entry(mut self, label: &'static str, key: &'static str, action: Action) -> Self {
        self.entries.push(Entry { label, key, action });
        self
    }

    pub fn set(
        self,
        label: &'static str,
        key: &'static str,
        notice: &'static str,
        apply: fn(&mut Session),
    ) -> Self {
        self.entry(label, key, Action::Set { notice, apply })
    }

    pub fn text(
        self,
        label: &'static str,
        key: &'static str,
        default: Option<&'static str>,
        apply: Apply<String>,
    ) -> Self {
        self.entry(
            label,
            key,
            Action::Text {
                prompt: label,
                default,
                apply,
            },
        )
    }

    pub fn verbatim(self, label: &'static str, key: &'static str, apply: Apply<String>) -> Self {
        self.entry(
            label,
            key,
            Action::Verbatim {
                prompt: label,
                masked: false,
                apply,
            },
        )
    }

    pub fn secret(self, label: &'static str, key: &'static str, apply: Apply<String>) -> Self {
        self.entry(
            label,
            key,
            Action::Verbatim {
                prompt: label,
                masked: true,
                apply,
            },
        )
    }

    pub fn integer(
        self,
        label: &'static str,
        key: &'static str,
        default: Option<i64>,
        apply: Apply<i64>,
    ) -> Self {
        self.entry(
            label,
            key,
            Action::Integer {
                prompt: label,
                default,
                apply,
            },
        )
    }

    pub fn list(self, label: &'static str, key: &'static str, apply: Apply<Vec<String>>) -> Self {
        self.entry(
            label,
            key,
            Action::List {
                prompt: label,
                apply,
            },
        )
    }

    pub fn choice(
        self,
        label: &'static str,
        key: &'static str,
        options: &'static [&'static str],
        default: Option<&'static str>,
        apply: Apply<String>,
    ) -> Self {
        self.entry(
            label,
            key,
            Action::Choice {
                prompt: label,
                options,
                default,
                apply,
            },
        )
    }

    pub fn confirm(self, label: &'static str, key: &'static str, apply: Apply<bool>) -> Self {
        self.entry(
            label,
            key,
            Action::Confirm {
                prompt: label,
                apply,
            },
        )
    }

    pub fn submenu(self, label: &'static str, menu: Menu) -> Self {
        let key = menu.title;
        self.entry(label, key, Action::Submenu(menu))
    }

    /// Number of the reserved "done" option
    pub fn done_number(&self) -> usize {
        self.entries.len() + 1
    }

    fn display(&self, ctx: &Context) {
        ctx.output.section(&format!("{} Menu", self.title));
        for (index, entry) in self.entries.iter().enumerate() {
            ctx.output.menu_option(index + 1, entry.label);
        }
        ctx.output.menu_option(self.done_number(), self.done_label);
    }

    /// Display the menu and dispatch selections until "done" is chosen
    pub fn run(&self, ctx: &Context, session: &mut Session) -> Result<()> {
        info!(menu = self.title, "entering menu");
        let collector = Collector::new(ctx);

        loop {
            self.display(ctx);
            let answer = collector.scalar("Please make your selection: ")?;

            match parse_selection(&answer) {
                Some(n) if n == self.done_number() => {
                    ctx.output
                        .notice(&format!("Saving and exiting {} menu", self.title));
                    info!(menu = self.title, "leaving menu");
                    return Ok(());
                }
                Some(n) if n <= self.entries.len() => {
                    self.entries[n - 1].invoke(ctx, session)?;
                }
                _ => debug!(menu = self.title, answer = %answer, "ignored selection"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockFileSystem, MockOutput, MockUserInput};
    use std::sync::Arc;

    fn context(lines: &[&str]) -> (Context, Arc<MockUserInput>, Arc<MockOutput>) {
        let input = Arc::new(MockUserInput::with_lines(lines));
        let output = Arc::new(MockOutput::new());
        let ctx = Context::test_with(Arc::new(MockFileSystem::new()), input.clone(), output.clone());
        (ctx, input, output)
    }

    fn backup_menu() -> Menu {
        Menu::new("Backup")
            .set("Disable Backups", "backup.enabled", "Backup is disabled", |s| {
                s.backup.enabled = false
            })
            .integer("Input Backup Rotation", "backup.rotation", Some(5), |s, v| {
                s.backup.rotation = v
            })
            .text("Input Backup Period", "backup.period", Some("24h"), |s, v| {
                s.backup.period = v
            })
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(" 3 "), Some(3));
        assert_eq!(parse_selection("0"), None);
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection("three"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_done_is_numbered_after_last_entry() {
        assert_eq!(backup_menu().done_number(), 4);
    }

    #[test]
    fn test_set_action_applies_and_notifies() {
        let (ctx, _, output) = context(&["1", "4"]);
        let mut session = Session::default();

        backup_menu().run(&ctx, &mut session).unwrap();

        assert!(!session.backup.enabled);
        assert!(output.get_notices().contains(&"Backup is disabled".to_string()));
    }

    #[test]
    fn test_invalid_selections_change_nothing() {
        let (ctx, _, output) = context(&["abc", "99", "0", "", "4"]);
        let mut session = Session::default();

        backup_menu().run(&ctx, &mut session).unwrap();

        assert_eq!(session, Session::default());
        // Menu shown once per selection attempt
        assert_eq!(output.sections().len(), 5);
    }

    #[test]
    fn test_text_default_applied_on_empty_answer() {
        let (ctx, _, _) = context(&["3", "", "4"]);
        let mut session = Session::default();
        session.backup.period = "12h".to_string();

        backup_menu().run(&ctx, &mut session).unwrap();

        assert_eq!(session.backup.period, "24h");
    }

    #[test]
    fn test_integer_garbage_leaves_value() {
        let (ctx, _, output) = context(&["2", "lots", "2", "9", "4"]);
        let mut session = Session::default();

        backup_menu().run(&ctx, &mut session).unwrap();

        assert_eq!(session.backup.rotation, 9);
        assert_eq!(output.get_warnings().len(), 1);
    }

    #[test]
    fn test_done_returns_to_parent_only() {
        let parent = Menu::new("Miscellaneous")
            .submenu("Modify Backup settings", backup_menu())
            .set("Disable ConfigReloader", "configReloader.enabled", "Config Reload is disabled", |s| {
                s.config_reloader.enabled = false
            });
        // enter child, leave child, then act in the parent before leaving it
        let (ctx, input, output) = context(&["1", "4", "2", "3"]);
        let mut session = Session::default();

        parent.run(&ctx, &mut session).unwrap();

        assert!(!session.config_reloader.enabled);
        assert!(session.backup.enabled);
        assert_eq!(input.remaining(), 0);
        assert_eq!(
            output.sections(),
            vec![
                "Miscellaneous Menu",
                "Backup Menu",
                "Miscellaneous Menu",
                "Miscellaneous Menu"
            ]
        );
    }

    #[test]
    fn test_menu_lists_done_option() {
        let (ctx, _, output) = context(&["4"]);
        let mut session = Session::default();

        backup_menu().run(&ctx, &mut session).unwrap();

        let messages = output.get_messages();
        assert!(messages.contains(&crate::traits::OutputMessage::MenuOption(
            4,
            "Save and Exit".to_string()
        )));
    }

    #[test]
    fn test_menu_errors_when_input_closes() {
        let (ctx, _, _) = context(&["1"]);
        let mut session = Session::default();

        assert!(backup_menu().run(&ctx, &mut session).is_err());
    }
}
