use std::io::Write;
use std::path::Path;

use arena_content::{Catalog, ConfigLoader, RonLoader, TextLoader, load_catalog, text};
use arena_core::{Choice, Competition, Element, Stat};

fn data(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn bundled_text_catalog_loads() {
    let catalog = TextLoader::load(&data("arena.txt")).expect("Failed to load arena.txt");
    assert_eq!(catalog.action_count(), 9);
    assert_eq!(catalog.monster_count(), 4);

    let boulder = catalog.monster("Boulder").expect("Boulder missing");
    assert_eq!(boulder.element, Element::Earth);
    assert_eq!(boulder.stats.get(Stat::Hp), 120);
}

#[test]
fn bundled_ron_catalog_matches_text_templates() {
    let ron = RonLoader::load(&data("arena.ron")).expect("Failed to load arena.ron");
    let text = TextLoader::load(&data("arena.txt")).expect("Failed to load arena.txt");

    for name in ["Droplet", "Cinder"] {
        let from_ron = ron.monster(name).expect("monster missing from RON");
        let from_text = text.monster(name).expect("monster missing from text");
        assert_eq!(from_ron.stats, from_text.stats, "{name}");
        assert_eq!(from_ron.element, from_text.element, "{name}");
    }
    assert_eq!(ron.action("Flurry"), text.action("Flurry"));
}

#[test]
fn extension_picks_the_format() {
    let text_file = write_temp(
        ".txt",
        "action Poke NORMAL\n damage target abs 5 100\nend action\nmonster Pip NORMAL 10 1 1 1 Poke\n",
    );
    let catalog = load_catalog(text_file.path()).expect("text load failed");
    assert!(catalog.spawn("Pip").is_some());

    let ron_file = write_temp(
        ".ron",
        r#"(
            actions: [(name: "Poke", element: NORMAL, effects: [Continue((hit_rate: 100))])],
            monsters: [(name: "Pip", element: NORMAL, stats: (hp: 10, atk: 1, def: 1, spd: 1), actions: ["Poke"])],
        )"#,
    );
    let catalog = load_catalog(ron_file.path()).expect("ron load failed");
    assert_eq!(catalog.monster_count(), 1);
}

#[test]
fn errors_name_the_file_and_line() {
    let file = write_temp(".txt", "action Poke NORMAL\n damage target abs five 100\nend action\n");
    let error = load_catalog(file.path()).unwrap_err().to_string();
    assert!(error.contains("line 2"), "{error}");
    assert!(error.contains(&file.path().display().to_string()), "{error}");

    assert!(load_catalog(Path::new("does/not/exist.txt")).is_err());
}

#[test]
fn rules_file_overrides_chances() {
    let file = write_temp(".toml", "wake_chance = 100.0\nburn_damage_percent = 25\n");
    let rules = ConfigLoader::load(file.path()).expect("Failed to load rules");
    assert_eq!(rules.wake_chance, 100.0);
    assert_eq!(rules.burn_damage_percent, 25);
}

#[test]
fn spawned_monsters_fight() {
    let catalog: Catalog = text::parse(include_str!("../data/arena.txt")).expect("parse failed");
    let mut competition = Competition::with_seed(7);
    for name in ["Droplet", "Cinder", "Cinder"] {
        let monster = catalog.spawn(name).expect("unknown monster");
        competition.add_combatant(monster).expect("add failed");
    }
    assert!(competition.find("Cinder#1").is_some());

    competition.start().expect("start failed");
    while !competition.is_decided() && competition.round() < 200 {
        competition
            .submit(Choice::action("Tackle"))
            .expect("Tackle is known to every monster here");
    }
    assert!(competition.is_decided());
}
