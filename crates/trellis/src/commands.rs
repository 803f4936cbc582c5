//! Checked command entry points for driving a [`GroupingModel`].
//!
//! The model accepts any strings. `ItemCommands` is the layer a text field
//! or a terminal talks to: it rejects empty input with a user-facing
//! [`InputError`], forwards valid commands to the model, and keeps an
//! [`ExpandedTreeView`] expanded after every command.

use std::sync::Arc;

use trellis_core::logging::targets;

use crate::config::TrellisConfig;
use crate::error::InputError;
use crate::model::{GroupingModel, Item, ModelTreeDebug};
use crate::view::ExpandedTreeView;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> <category>`
    Add {
        /// Item name, possibly empty.
        name: String,
        /// Item category, possibly empty.
        category: String,
    },
    /// `remove <name>`
    Remove {
        /// Item name, possibly empty.
        name: String,
    },
    /// `toggle`
    Toggle,
    /// `show`: print the view.
    Show,
    /// `dump`: print the full model tree.
    Dump,
}

impl Command {
    /// Parses a whitespace-separated command line.
    ///
    /// Missing arguments become empty strings so that validation, not
    /// parsing, reports them. Returns `None` for blank lines and unknown
    /// verbs.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let mut arg = || words.next().unwrap_or_default().to_string();
        match verb {
            "add" => {
                let name = arg();
                let category = arg();
                Some(Command::Add { name, category })
            }
            "remove" => Some(Command::Remove { name: arg() }),
            "toggle" => Some(Command::Toggle),
            "show" => Some(Command::Show),
            "dump" => Some(Command::Dump),
            _ => None,
        }
    }
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The model changed.
    Changed,
    /// A remove matched nothing; the model is unchanged.
    NotFound,
    /// Text to display.
    Output(String),
}

/// Validating front end for a [`GroupingModel`] and its view.
#[derive(Debug)]
pub struct ItemCommands {
    model: Arc<GroupingModel>,
    view: ExpandedTreeView,
    config: TrellisConfig,
}

impl ItemCommands {
    /// Creates a new model from `config` and a view over it.
    pub fn new(config: TrellisConfig) -> Self {
        Self::with_model(Arc::new(GroupingModel::with_config(&config)), config)
    }

    /// Wraps an existing model.
    pub fn with_model(model: Arc<GroupingModel>, config: TrellisConfig) -> Self {
        let view = ExpandedTreeView::new(model.clone());
        Self {
            model,
            view,
            config,
        }
    }

    /// Returns the model.
    pub fn model(&self) -> &Arc<GroupingModel> {
        &self.model
    }

    /// Returns the view.
    pub fn view_mut(&mut self) -> &mut ExpandedTreeView {
        &mut self.view
    }

    /// Adds an item after checking that neither field is empty.
    pub fn add_item(&mut self, name: &str, category: &str) -> Result<(), InputError> {
        if name.is_empty() || category.is_empty() {
            tracing::warn!(target: targets::COMMANDS, name, category, "add rejected: empty field");
            return Err(InputError::MissingNameOrCategory);
        }
        self.model.add_item(name, category);
        self.after_command();
        Ok(())
    }

    /// Removes the first item named `name` after checking it is not empty.
    ///
    /// Returns the removed item, or `None` when nothing matched.
    pub fn remove_item(&mut self, name: &str) -> Result<Option<Item>, InputError> {
        if name.is_empty() {
            tracing::warn!(target: targets::COMMANDS, "remove rejected: empty name");
            return Err(InputError::MissingName);
        }
        let removed = self.model.remove_item(name);
        self.after_command();
        Ok(removed)
    }

    /// Switches between flat and grouped presentation.
    pub fn toggle_grouping(&mut self) {
        self.model.toggle_grouping();
        self.after_command();
    }

    /// Renders the view as text.
    pub fn render(&mut self) -> String {
        self.view.render()
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, InputError> {
        match command {
            Command::Add { name, category } => {
                self.add_item(&name, &category).map(|()| Outcome::Changed)
            }
            Command::Remove { name } => self.remove_item(&name).map(|removed| match removed {
                Some(_) => Outcome::Changed,
                None => Outcome::NotFound,
            }),
            Command::Toggle => {
                self.toggle_grouping();
                Ok(Outcome::Changed)
            }
            Command::Show => Ok(Outcome::Output(self.render())),
            Command::Dump => Ok(Outcome::Output(
                ModelTreeDebug::with_style(self.config.tree_style).format(&*self.model),
            )),
        }
    }

    fn after_command(&mut self) {
        if self.config.expand_after_command {
            self.view.expand_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupingMode;

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse("add Apple Fruit"),
            Some(Command::Add {
                name: "Apple".into(),
                category: "Fruit".into()
            })
        );
        assert_eq!(
            Command::parse("add Apple"),
            Some(Command::Add {
                name: "Apple".into(),
                category: String::new()
            })
        );
        assert_eq!(
            Command::parse("  remove   Apple "),
            Some(Command::Remove {
                name: "Apple".into()
            })
        );
        assert_eq!(Command::parse("toggle"), Some(Command::Toggle));
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("explode"), None);
    }

    #[test]
    fn test_add_rejects_empty_fields() {
        let mut commands = ItemCommands::new(TrellisConfig::default());
        assert_eq!(
            commands.add_item("Apple", ""),
            Err(InputError::MissingNameOrCategory)
        );
        assert_eq!(
            commands.add_item("", "Fruit"),
            Err(InputError::MissingNameOrCategory)
        );
        assert_eq!(commands.model().item_count(), 0);
        assert_eq!(commands.model().epoch(), 1);
    }

    #[test]
    fn test_remove_rejects_empty_name() {
        let mut commands = ItemCommands::new(TrellisConfig::default());
        let err = commands.remove_item("").unwrap_err();
        assert_eq!(err.to_string(), "Please enter the name of the item to remove.");
        assert_eq!(err.title(), "Input Error");
    }

    #[test]
    fn test_execute_sequence() {
        let mut commands = ItemCommands::new(TrellisConfig::default());
        for line in ["add Apple Fruit", "add Carrot Veg", "toggle"] {
            let command = Command::parse(line).unwrap();
            assert_eq!(commands.execute(command), Ok(Outcome::Changed));
        }
        assert_eq!(commands.model().grouping_mode(), GroupingMode::Grouped);
        assert_eq!(
            commands.execute(Command::Remove { name: "Ghost".into() }),
            Ok(Outcome::NotFound)
        );
        assert_eq!(
            commands.execute(Command::Show),
            Ok(Outcome::Output("- Fruit\n    Apple\n- Veg\n    Carrot\n".into()))
        );
    }

    #[test]
    fn test_expand_after_command() {
        let config = TrellisConfig {
            initial_mode: GroupingMode::Grouped,
            ..Default::default()
        };
        let mut commands = ItemCommands::new(config);
        commands.add_item("Apple", "Fruit").unwrap();
        commands.view_mut().collapse_all();
        assert_eq!(commands.render(), "+ Fruit\n");

        commands.add_item("Banana", "Fruit").unwrap();
        assert_eq!(commands.render(), "- Fruit\n    Apple\n    Banana\n");
    }

    #[test]
    fn test_no_expand_when_disabled() {
        let config = TrellisConfig {
            initial_mode: GroupingMode::Grouped,
            expand_after_command: false,
            ..Default::default()
        };
        let mut commands = ItemCommands::new(config);
        commands.view_mut().collapse_all();
        commands.add_item("Apple", "Fruit").unwrap();
        assert_eq!(commands.render(), "+ Fruit\n");
    }
}
