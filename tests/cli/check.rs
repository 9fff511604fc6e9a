use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, STRING_DIR};

fn scenario() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_table("EN", "Greeting", "    Hello = \"Hi %1\",\n")?;
    test.write_table("EN", "Menu", "    Quit = \"Quit\",\n")?;
    test.write_table(
        "FR",
        "Greeting",
        "    Hello = \"Bonjour\",\n    Bye = \"Au revoir\",\n",
    )?;
    Ok(test)
}

#[test]
fn test_clean_tree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("EN", "Greeting", "    Hello = \"Hi %1\",\n")?;
    test.write_table("FR", "Greeting", "    Hello = \"Bonjour %1\",\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_machine_readable_report() -> Result<()> {
    let test = scenario()?;

    // Warnings alone do not fail the run
    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_human_readable_report() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["-v", "2"]));

    Ok(())
}

#[test]
fn test_strict_fails_on_warnings() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().arg("--strict"));

    Ok(())
}

#[test]
fn test_silent_strict() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["-v", "0", "--strict"]));

    Ok(())
}

#[test]
fn test_missing_base_locale_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("FR", "Greeting", "    Hello = \"Bonjour\",\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_global_ignore() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["--ignore", "extra,missing_file"]));

    Ok(())
}

#[test]
fn test_unknown_ignore_code() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["--ignore", "extra,typo"]));

    Ok(())
}

#[test]
fn test_unknown_ignore_code_silent() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["-v", "0", "--ignore", "typo"]));

    Ok(())
}

#[test]
fn test_inline_ignore() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table(
        "EN",
        "Greeting",
        "    Hello = \"Hi %1\",\n    Name = \"Name\",\n",
    )?;
    test.write_table(
        "FR",
        "Greeting",
        "    Hello = \"Salut\", ---@ignore substitution_count\n    Name = \"Name\",\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_other_base_locale() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["-b", "FR"]));

    Ok(())
}

#[test]
fn test_default_locale_encoding() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("EN", "Greeting", "    Hello = \"café\",\n")?;
    // UTF-8 bytes, while FR defaults to windows-1252
    test.write_table("FR", "Greeting", "    Hello = \"café\",\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_encoding_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("EN", "Greeting", "    Hello = \"café\",\n")?;
    test.write_table("FR", "Greeting", "    Hello = \"café\",\n")?;

    assert_cmd_snapshot!(test.check_command().args(["-e", "FR:utf_8"]));

    Ok(())
}

#[test]
fn test_unknown_encoding_is_an_error() -> Result<()> {
    let test = scenario()?;

    assert_cmd_snapshot!(test.check_command().args(["-e", "FR:klingon"]));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = scenario()?;
    test.write_file(
        ".transcheckrc.json",
        r#"{
            "ignore": ["extra"],
            "strict": true
        }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_custom_string_subdir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Translate/EN/Greeting_EN.txt", "header\nHello = \"Hi\",\n")?;
    test.write_file("Translate/FR/Greeting_FR.txt", "header\n")?;

    assert_cmd_snapshot!(test.check_command().args(["--string-subdir", "Translate"]));

    // The default location is empty
    assert!(!test.root().join(STRING_DIR).exists());

    Ok(())
}

#[test]
fn test_continuation_and_reserved_prefixes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table(
        "EN",
        "Tooltip",
        "    Tooltip_Long = \"first \"..\n        \"second\",\n\
         \x20   ItemName_Axe = \"Axe\"..\n        \"ignored\",\n",
    )?;
    test.write_table(
        "FR",
        "Tooltip",
        "    Tooltip_Long = \"first \"..\n        \"second\",\n\
         \x20   ItemName_Axe = \"Hache\",\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_run_is_repeatable() -> Result<()> {
    let test = scenario()?;

    let first = test.check_command().output()?;
    let second = test.check_command().output()?;
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());

    Ok(())
}
