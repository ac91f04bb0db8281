//! End-to-end console sessions against the in-memory platform.

use sheetz_domain::{Ability, CharacterClass, Coin};
use sheetz_player::infrastructure::platform::mock::{create_mock_platform, MockStorageProvider};
use sheetz_player::ports::outbound::{storage_keys, StorageProvider};
use sheetz_player::runner::config::RunnerConfig;
use sheetz_player::runner::{run_with_io, Flow, RunnerDeps, SheetShell};
use sheetz_player::ui::{Command, ShellKind};

/// Output text, the storage handle and the URLs opened.
fn run_script(shell: ShellKind, script: &str) -> (String, MockStorageProvider, Vec<String>) {
    let (platform, storage, links) = create_mock_platform();
    let deps = RunnerDeps {
        platform,
        config: RunnerConfig {
            shell,
            storage_path: None,
        },
    };
    let mut output = Vec::new();
    run_with_io(deps, script.as_bytes(), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), storage, links.opened())
}

fn execute(shell: &mut SheetShell, line: &str) -> Vec<String> {
    let command: Command = line.parse().unwrap();
    let (flow, lines) = shell.execute(command).unwrap();
    assert_eq!(flow, Flow::Continue);
    lines
}

#[test]
fn browser_session_end_to_end() {
    let script = "\
set name Vex
class Wizard
set str 15abc
set ac x
lock
set name Other
damage 3
heal 10
add Rope
add
set gp 2
set sp 15
convert
theme
open guide
open spell 1
dance
clear
yes
quit
set name Ignored
";
    let (output, storage, opened) = run_script(ShellKind::Browser, script);

    assert!(output.contains("Vex | Wizard"));
    assert!(output.contains("STR 15 (+2)"));
    assert!(output.contains("AC 10"));
    assert!(output.contains("name is locked"));
    assert!(output.contains("Took 3 damage, 5 HP left"));
    assert!(output.contains("Healed 3, now 8 HP"));
    assert!(output.contains("Item added"));
    assert!(output.contains("Item name cannot be empty"));
    assert!(output.contains("Converted to 3 gp (50 cp of change discarded)"));
    assert!(output.contains("Dark mode on"));
    assert!(output.contains("Error: Validation failed: unknown command 'dance' (try help)"));
    assert!(output.contains("This will reset all character data. Are you sure? (yes/no)"));
    assert!(output.contains("Character cleared"));
    assert!(!output.contains("Ignored"));

    assert_eq!(storage.load(storage_keys::DARK_MODE).as_deref(), Some("true"));
    assert_eq!(
        opened,
        vec![
            "https://www.dndbeyond.com/classes/wizard".to_string(),
            "https://www.dndbeyond.com/spells".to_string(),
        ]
    );
}

#[test]
fn mobile_session_rules() {
    let (platform, _, _) = create_mock_platform();
    let mut shell = SheetShell::new(&platform, ShellKind::Mobile);
    assert_eq!(shell.session().sheet().hit_points().current(), 10);

    execute(&mut shell, "set ac 15abc");
    execute(&mut shell, "set hp 4");
    execute(&mut shell, "set wis 13");
    execute(&mut shell, "set wis wise");
    execute(&mut shell, "set pp 2x");
    execute(&mut shell, "class druid");
    let sheet = shell.session().sheet();
    assert_eq!(sheet.armor_class(), 10);
    assert_eq!(sheet.hit_points().current(), 4);
    assert_eq!(sheet.abilities().get(Ability::Wisdom), 13);
    assert_eq!(sheet.wealth().get(Coin::Platinum), 2);
    assert_eq!(sheet.class(), Some(CharacterClass::Druid));

    execute(&mut shell, "portrait file:///hero.jpg");
    execute(&mut shell, "lock");
    execute(&mut shell, "portrait file:///other.jpg");
    execute(&mut shell, "unportrait");
    assert_eq!(
        shell.session().sheet().portrait().map(|p| p.as_str()),
        Some("file:///hero.jpg")
    );

    execute(&mut shell, "lock");
    let lines = execute(&mut shell, "portrait denied");
    assert_eq!(
        lines[0],
        "Permission required: Please allow access to your photos."
    );

    let lines = execute(&mut shell, "heal 20");
    assert_eq!(lines[0], "Healed 6, now 10 HP");
}

#[test]
fn item_commands_use_list_positions() {
    let (platform, _, _) = create_mock_platform();
    let mut shell = SheetShell::new(&platform, ShellKind::Browser);
    execute(&mut shell, "add Rope");
    execute(&mut shell, "add Torch");
    execute(&mut shell, "qty 2 3abc");
    execute(&mut shell, "rename 1 Silk Rope");
    let items = shell.session().sheet().items();
    assert_eq!(items[0].name(), "Silk Rope");
    assert_eq!(items[1].quantity().value(), 3);

    let lines = execute(&mut shell, "rm 1");
    assert_eq!(lines[0], "Removed Silk Rope");
    assert_eq!(shell.session().sheet().items().len(), 1);
}

#[test]
fn theme_preference_survives_restart() {
    let (platform, storage, _) = create_mock_platform();
    let mut shell = SheetShell::new(&platform, ShellKind::Browser);
    assert!(!shell.is_dark());
    shell.execute(Command::Theme).unwrap();

    let restarted = SheetShell::new(&platform, ShellKind::Browser);
    assert!(restarted.is_dark());
    assert_eq!(storage.load(storage_keys::DARK_MODE).as_deref(), Some("true"));
}
