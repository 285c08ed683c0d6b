//! The app: one listing, one selection container, a status bar.

use std::io;

use log::{debug, info};
use selectfy::{
    ChangeEvent, Command, CommandOutput, ContainerId, GestureEvents, MarkedItems, Registry,
    SelectError, SelectionController,
};

use crate::config::AppConfig;
use crate::event::{self, Action};
use crate::render::{self, MarkStyles, StyleTable};
use crate::source::Listing;
use crate::terminal::Terminal;

pub struct App {
    title: String,
    listing: Listing,
    registry: Registry<MarkedItems<usize>>,
    container: ContainerId,
    marks: MarkStyles,
    status: String,
}

impl App {
    pub fn new(title: String, listing: Listing, config: &AppConfig) -> Result<Self, SelectError> {
        config.marks.validate()?;
        let marks = config.mark_styles(&StyleTable::default())?;

        let mut registry = Registry::new();
        let container = registry.init(listing.items(), config.select);
        let status = format!("{} items", listing.item_count());

        Ok(Self {
            title,
            listing,
            registry,
            container,
            marks,
            status,
        })
    }

    fn controller(&self) -> Result<&SelectionController<MarkedItems<usize>>, SelectError> {
        self.registry.get(self.container)
    }

    /// Apply one action. Returns false when the app should exit.
    pub fn handle(&mut self, action: Action, height: u16) -> Result<bool, SelectError> {
        match action {
            Action::Quit => return Ok(false),
            Action::Click { row, modifiers } => {
                let item = render::entry_at_row(row, height, self.listing.entries().len())
                    .and_then(|entry| self.listing.item_at(entry));
                if let Some(item) = item {
                    let events = self
                        .registry
                        .get_mut(self.container)?
                        .handle_gesture(item, modifiers)?;
                    self.report_gesture(&events);
                }
            }
            Action::Command(command) => {
                self.run(command)?;
            }
            Action::Resize | Action::Ignore => {}
        }
        Ok(true)
    }

    /// Run a selection command by name.
    pub fn call(&mut self, name: &str) -> Result<CommandOutput, SelectError> {
        let command: Command = name.parse()?;
        self.run(command)
    }

    /// Text for a query result: one label per selected item, or the count.
    pub fn describe(&self, output: &CommandOutput) -> Option<String> {
        match output {
            CommandOutput::Selected(items) => Some(
                items
                    .iter()
                    .filter_map(|&item| self.listing.label_of(item))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            CommandOutput::Count(count) => Some(count.to_string()),
            CommandOutput::Changed(_) => None,
        }
    }

    fn run(&mut self, command: Command) -> Result<CommandOutput, SelectError> {
        let output = self.registry.dispatch(self.container, command)?;
        if command.is_query() {
            debug!("{command}: {output:?}");
        } else if let CommandOutput::Changed(event) = &output {
            self.report_change(event);
        }
        Ok(output)
    }

    fn report_gesture(&mut self, events: &GestureEvents) {
        if let Some(change) = &events.selection_change {
            self.report_change(change);
        }
        if let Some(moved) = events.highlight_move {
            debug!("highlight {:?} -> {}", moved.previous, moved.current);
        }
    }

    fn report_change(&mut self, event: &ChangeEvent) {
        info!("selection changed: {:?}", event.selected);
        self.status = render::describe_change(event, self.listing.item_count());
    }

    pub fn run_loop(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        loop {
            let size = terminal.size()?;
            let controller = self.controller().map_err(io::Error::other)?;
            let lines = render::frame(&self.title, &self.listing, controller, self.marks, &self.status, size);
            terminal.draw(&lines)?;

            for raw in terminal.next_events()? {
                let action = event::translate(&raw);
                if !self.handle(action, size.1).map_err(io::Error::other)? {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::HEADER_ROWS;
    use crate::source::Entry;
    use selectfy::Modifiers;

    const HEIGHT: u16 = 20;

    fn app() -> App {
        let entries = vec![
            Entry::new("notes/").tag("selectable"),
            Entry::new(".git/"),
            Entry::new("a.txt").tag("selectable"),
            Entry::new("b.txt").tag("selectable"),
        ];
        let listing = Listing::new(entries, "selectable");
        App::new("test".to_string(), listing, &AppConfig::default()).unwrap()
    }

    fn click(row: usize, modifiers: Modifiers) -> Action {
        Action::Click {
            row: HEADER_ROWS + row as u16,
            modifiers,
        }
    }

    fn selected(app: &App) -> Vec<usize> {
        app.controller().unwrap().selected()
    }

    #[test]
    fn test_click_on_entry_row() {
        let mut app = app();
        assert!(app.handle(click(2, Modifiers::new()), HEIGHT).unwrap());
        assert_eq!(selected(&app), vec![1]);
        assert_eq!(app.status, "1 of 3 selected");

        app.handle(click(0, Modifiers::shift()), HEIGHT).unwrap();
        assert_eq!(selected(&app), vec![0, 1]);
    }

    #[test]
    fn test_clicks_outside_items_are_ignored() {
        let mut app = app();
        app.handle(click(1, Modifiers::new()), HEIGHT).unwrap();
        app.handle(Action::Click { row: 0, modifiers: Modifiers::new() }, HEIGHT).unwrap();
        app.handle(click(10, Modifiers::new()), HEIGHT).unwrap();
        assert!(selected(&app).is_empty());
        assert_eq!(app.status, "3 items");
    }

    #[test]
    fn test_commands_and_quit() {
        let mut app = app();
        app.handle(Action::Command(Command::SelectAll), HEIGHT).unwrap();
        assert_eq!(app.status, "3 of 3 selected");

        assert_eq!(
            app.call("unselectAll"),
            Ok(CommandOutput::Changed(ChangeEvent::new(vec![])))
        );
        assert_eq!(
            app.call("explode"),
            Err(SelectError::UnknownCommand("explode".to_string()))
        );
        assert!(!app.handle(Action::Quit, HEIGHT).unwrap());
    }

    #[test]
    fn test_query_commands_return_values() {
        let mut app = app();
        app.call("selectAll").unwrap();

        assert_eq!(app.call("getSelected"), Ok(CommandOutput::Selected(vec![0, 1, 2])));
        assert_eq!(app.call("getCount"), Ok(CommandOutput::Count(3)));
        assert_eq!(app.status, "3 of 3 selected");

        app.handle(click(2, Modifiers::new()), HEIGHT).unwrap();
        assert_eq!(app.call("get_selected"), Ok(CommandOutput::Selected(vec![1])));
        assert_eq!(app.status, "1 of 3 selected");
    }

    #[test]
    fn test_describe_query_outputs() {
        let mut app = app();
        app.handle(click(0, Modifiers::new()), HEIGHT).unwrap();
        app.handle(click(3, Modifiers::ctrl()), HEIGHT).unwrap();

        let selected = app.call("getSelected").unwrap();
        assert_eq!(app.describe(&selected).as_deref(), Some("notes/\nb.txt"));
        let count = app.call("getCount").unwrap();
        assert_eq!(app.describe(&count).as_deref(), Some("2"));
        let changed = app.call("unselectAll").unwrap();
        assert_eq!(app.describe(&changed), None);
    }

    #[test]
    fn test_invalid_marks_are_rejected() {
        let mut config = AppConfig::default();
        config.marks.selected_class = "glow".to_string();
        let listing = Listing::new(vec![Entry::new("x").tag("selectable")], "selectable");
        assert!(App::new("t".to_string(), listing, &config).is_err());
    }
}
