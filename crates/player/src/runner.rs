use std::io::{BufRead, Write};

use anyhow::Context;
use sheetz_domain::{DomainError, ItemId, PortraitPick};

use crate::application::dto::SheetView;
use crate::application::services::{DialogKind, ReferenceService, SheetSession};
use crate::state::{Platform, PlatformStorageAdapter, ThemePreference};
use crate::ui::console::{self, Command};
use crate::ui::{
    AdapterResponse, BrowserAdapter, BrowserEvent, FormAdapter, FormControl, FormField,
    MobileAdapter, MobileEvent, ShellKind,
};

/// Configuration types for the player runner.
pub mod config {
    use std::path::PathBuf;

    use crate::ui::ShellKind;

    pub const SHELL_ENV: &str = "SHEETZ_SHELL";
    pub const STORAGE_PATH_ENV: &str = "SHEETZ_STORAGE_PATH";

    #[derive(Clone, Debug, Default)]
    pub struct RunnerConfig {
        pub shell: ShellKind,
        /// Overrides the per-user preferences file
        pub storage_path: Option<PathBuf>,
    }

    impl RunnerConfig {
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let shell = match lookup(SHELL_ENV) {
                Some(raw) => raw.parse().unwrap_or_else(|e| {
                    tracing::warn!("{}; using the default layout", e);
                    ShellKind::default()
                }),
                None => ShellKind::default(),
            };
            let storage_path = lookup(STORAGE_PATH_ENV)
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from);
            Self {
                shell,
                storage_path,
            }
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: RunnerConfig,
}

/// The form layout chosen at startup.
#[derive(Debug, Clone, Copy)]
enum Layout {
    Browser(BrowserAdapter),
    Mobile(MobileAdapter),
}

impl Layout {
    fn for_shell(shell: ShellKind) -> Self {
        match shell {
            ShellKind::Browser => Self::Browser(BrowserAdapter::new()),
            ShellKind::Mobile => Self::Mobile(MobileAdapter::new()),
        }
    }

    fn type_text(&self, session: &mut SheetSession, field: FormField, text: &str) -> AdapterResponse {
        match self {
            Self::Browser(a) => a.handle(session, BrowserEvent::input(field, text)),
            Self::Mobile(a) => a.handle(session, MobileEvent::change_text(field, text)),
        }
    }

    fn choose(&self, session: &mut SheetSession, field: FormField, value: &str) -> AdapterResponse {
        match self {
            Self::Browser(a) => a.handle(session, BrowserEvent::input(field, value)),
            Self::Mobile(a) => a.handle(session, MobileEvent::value_change(field, value)),
        }
    }

    fn submit(&self, session: &mut SheetSession, field: FormField) -> AdapterResponse {
        match self {
            Self::Browser(a) => a.handle(session, BrowserEvent::key_down(field, "Enter")),
            Self::Mobile(a) => a.handle(session, MobileEvent::SubmitEditing { field }),
        }
    }

    fn press(&self, session: &mut SheetSession, control: FormControl) -> AdapterResponse {
        match self {
            Self::Browser(a) => a.handle(session, BrowserEvent::Click(control)),
            Self::Mobile(a) => a.handle(session, MobileEvent::Press(control)),
        }
    }

    fn portrait_picked(&self, session: &mut SheetSession, pick: PortraitPick) -> AdapterResponse {
        match self {
            Self::Browser(a) => a.portrait_picked(session, pick),
            Self::Mobile(a) => a.portrait_picked(session, pick),
        }
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a running console needs: the session, the chosen layout,
/// the theme preference and the links panel.
pub struct SheetShell {
    session: SheetSession,
    layout: Layout,
    theme: ThemePreference<PlatformStorageAdapter>,
    references: ReferenceService,
}

impl SheetShell {
    pub fn new(platform: &Platform, shell: ShellKind) -> Self {
        Self {
            session: SheetSession::new(shell.sheet_defaults()),
            layout: Layout::for_shell(shell),
            theme: ThemePreference::load(platform.storage_adapter()),
            references: ReferenceService::new(platform.link_opener()),
        }
    }

    pub fn session(&self) -> &SheetSession {
        &self.session
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn render(&self) -> String {
        console::render_sheet(&SheetView::from(self.session.sheet()), self.theme.is_dark())
    }

    /// Resolve a 1-based item position as printed by `show`.
    fn item_at(&self, position: usize) -> Result<ItemId, DomainError> {
        position
            .checked_sub(1)
            .and_then(|index| self.session.sheet().items().get(index))
            .map(|item| item.id())
            .ok_or_else(|| DomainError::not_found("item", position.to_string()))
    }

    fn amount_field(kind: DialogKind) -> FormField {
        match kind {
            DialogKind::Damage => FormField::DamageAmount,
            DialogKind::Heal => FormField::HealAmount,
        }
    }

    /// Run one command and return the lines to print.
    ///
    /// Sheet commands go through the layout's widget events and are
    /// followed by the re-rendered sheet.
    pub fn execute(&mut self, command: Command) -> anyhow::Result<(Flow, Vec<String>)> {
        let mut lines = Vec::new();
        let response = match command {
            Command::Help => {
                lines.push(console::HELP.to_string());
                return Ok((Flow::Continue, lines));
            }
            Command::Quit => return Ok((Flow::Quit, lines)),
            Command::Json => {
                let view = SheetView::from(self.session.sheet());
                lines.push(serde_json::to_string_pretty(&view).context("encoding sheet view")?);
                return Ok((Flow::Continue, lines));
            }
            Command::Theme => {
                let dark = self.theme.toggle();
                lines.push(format!("Dark mode {}", if dark { "on" } else { "off" }));
                return Ok((Flow::Continue, lines));
            }
            Command::Links => {
                let guide = self.references.class_guide(self.session.sheet().class());
                lines.push(console::render_links(
                    guide.as_ref(),
                    self.references.spell_resources(),
                    self.references.general_resources(),
                ));
                return Ok((Flow::Continue, lines));
            }
            Command::Open(entry) => {
                match self.references.open(entry, self.session.sheet().class()) {
                    Ok(Some(url)) => lines.push(format!("Opened {url}")),
                    Ok(None) => lines.push("Nothing to open".to_string()),
                    Err(e) => lines.push(format!("Error: {e}")),
                }
                return Ok((Flow::Continue, lines));
            }
            Command::Show => None,
            other => Some(self.apply(other)),
        };

        if let Some(response) = response {
            let response = response.unwrap_or_else(AdapterResponse::Rejected);
            lines.extend(console::describe_response(&response));
        }
        lines.push(self.render());
        Ok((Flow::Continue, lines))
    }

    fn apply(&mut self, command: Command) -> Result<AdapterResponse, DomainError> {
        let layout = self.layout;
        let response = match command {
            Command::Set { field, text } => layout.type_text(&mut self.session, field, &text),
            Command::Class(value) => layout.choose(&mut self.session, FormField::Class, &value),
            Command::ToggleLock => layout.press(&mut self.session, FormControl::ToggleLock),
            Command::OpenDialog(kind) => {
                layout.press(&mut self.session, FormControl::OpenDialog(kind))
            }
            Command::Amount { kind, text } => {
                if !self.session.dialog(kind).is_open() {
                    layout.press(&mut self.session, FormControl::OpenDialog(kind));
                }
                let field = Self::amount_field(kind);
                layout.type_text(&mut self.session, field, &text);
                layout.submit(&mut self.session, field)
            }
            Command::CancelDialog(kind) => {
                layout.press(&mut self.session, FormControl::CancelDialog(kind))
            }
            Command::Add(name) => {
                layout.type_text(&mut self.session, FormField::NewItemName, &name);
                layout.submit(&mut self.session, FormField::NewItemName)
            }
            Command::Rename { position, name } => {
                let id = self.item_at(position)?;
                layout.type_text(&mut self.session, FormField::ItemName(id), &name)
            }
            Command::Quantity { position, text } => {
                let id = self.item_at(position)?;
                layout.type_text(&mut self.session, FormField::ItemQuantity(id), &text)
            }
            Command::Remove { position } => {
                let id = self.item_at(position)?;
                layout.press(&mut self.session, FormControl::RemoveItem(id))
            }
            Command::Convert => layout.press(&mut self.session, FormControl::ConvertToGold),
            Command::Portrait(pick) => {
                match layout.press(&mut self.session, FormControl::PickPortrait) {
                    AdapterResponse::RequestPortraitPick => {
                        layout.portrait_picked(&mut self.session, pick)
                    }
                    other => other,
                }
            }
            Command::RemovePortrait => layout.press(&mut self.session, FormControl::RemovePortrait),
            Command::Clear => layout.press(&mut self.session, FormControl::RequestClear),
            Command::ConfirmClear => layout.press(&mut self.session, FormControl::ConfirmClear),
            Command::CancelClear => layout.press(&mut self.session, FormControl::CancelClear),
            Command::Help
            | Command::Show
            | Command::Json
            | Command::Quit
            | Command::Theme
            | Command::Links
            | Command::Open(_) => AdapterResponse::Ignored,
        };
        Ok(response)
    }
}

/// Read commands from `input` until it ends or `quit`, writing feedback
/// to `output`.
pub fn run_with_io<R: BufRead, W: Write>(
    deps: RunnerDeps,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let RunnerDeps { platform, config } = deps;
    tracing::info!(shell = %config.shell, "Starting sheet console");

    let mut shell = SheetShell::new(&platform, config.shell);
    writeln!(output, "{}", shell.render())?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Error: {e}")?;
                continue;
            }
        };
        let (flow, lines) = shell.execute(command)?;
        for text in lines {
            writeln!(output, "{text}")?;
        }
        output.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    tracing::info!("Sheet console closed");
    Ok(())
}

/// Run the console on stdin and stdout.
pub fn run(deps: RunnerDeps) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(deps, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::config::*;
    use super::*;

    mod config_from_env {
        use super::*;

        #[test]
        fn missing_vars_use_defaults() {
            let config = RunnerConfig::from_lookup(|_| None);
            assert_eq!(config.shell, ShellKind::Browser);
            assert!(config.storage_path.is_none());
        }

        #[test]
        fn reads_shell_and_storage_path() {
            let config = RunnerConfig::from_lookup(|key| match key {
                SHELL_ENV => Some("MOBILE".to_string()),
                STORAGE_PATH_ENV => Some("/tmp/sheetz.json".to_string()),
                _ => None,
            });
            assert_eq!(config.shell, ShellKind::Mobile);
            assert_eq!(
                config.storage_path.as_deref(),
                Some(std::path::Path::new("/tmp/sheetz.json"))
            );
        }

        #[test]
        fn unknown_shell_falls_back() {
            let config = RunnerConfig::from_lookup(|key| {
                (key == SHELL_ENV).then(|| "tablet".to_string())
            });
            assert_eq!(config.shell, ShellKind::Browser);
        }
    }

    mod shell {
        use super::*;
        use crate::infrastructure::platform::mock::create_mock_platform;

        #[test]
        fn unknown_item_position_is_reported() {
            let (platform, _, _) = create_mock_platform();
            let mut shell = SheetShell::new(&platform, ShellKind::Browser);
            let (flow, lines) = shell.execute(Command::Remove { position: 3 }).unwrap();
            assert_eq!(flow, Flow::Continue);
            assert_eq!(lines[0], "Error: Entity not found: item with id 3");
        }

        #[test]
        fn quit_stops_the_loop() {
            let (platform, _, _) = create_mock_platform();
            let mut shell = SheetShell::new(&platform, ShellKind::Mobile);
            let (flow, lines) = shell.execute(Command::Quit).unwrap();
            assert_eq!(flow, Flow::Quit);
            assert!(lines.is_empty());
        }

        #[test]
        fn new_shell_adds_no_observers() {
            // the session already logs each change
            let (platform, _, _) = create_mock_platform();
            let shell = SheetShell::new(&platform, ShellKind::Browser);
            assert_eq!(shell.session().observer_count(), 0);
        }
    }
}
