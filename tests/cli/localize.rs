use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const HEADER: &str = r#"msgid ""
msgstr ""
"Language: en-US\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"
"#;

const VIEW_MODEL: &str = r#"namespace Haf.Demo
{
    public class MainViewModel
    {
        private static readonly LocalizedText Title = new LocalizedText("Main window");

        public string Status(int count)
        {
            return Texts.GetText("status", "{0} file", "{0} files", count);
        }

        public string Save() => Texts.GetText("menu", "Save");
    }
}
"#;

const MAIN_VIEW: &str = r#"<Window xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
        xmlns:res="clr-namespace:Haf.Resources">
  <StackPanel>
    <TextBlock Text="{res:Localize 'Main window'}" />
    <Button Content="{res:Localize 'toolbar//Open'}" />
  </StackPanel>
</Window>
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("src/ViewModels/MainViewModel.cs", VIEW_MODEL)?;
    test.write_file("src/Views/MainView.xaml", MAIN_VIEW)?;
    test.write_file("src/README.md", "Texts.GetText(\"not code\")")?;
    Ok(test)
}

#[test]
fn test_localize_writes_catalog() -> Result<()> {
    let test = project()?;

    let output = test.localize_command().output()?;
    assert!(output.status.success());

    let expected = format!(
        r#"{HEADER}
#: ViewModels/MainViewModel.cs:5
msgid "Main window"
msgstr ""

#: ViewModels/MainViewModel.cs:9
msgctxt "status"
msgid "{{0}} file"
msgid_plural "{{0}} files"
msgstr[0] ""
msgstr[1] ""

#: ViewModels/MainViewModel.cs:12
msgctxt "menu"
msgid "Save"
msgstr ""

#: Views/MainView.xaml:5
msgctxt "toolbar"
msgid "Open"
msgstr ""
"#
    );
    assert_eq!(test.read_file("out/messages.pot")?, expected);

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Wrote 4 entries from 2 files to out/messages.pot"));
    assert!(stdout.contains("1 duplicate text skipped"));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("scanning"));
    assert!(stderr.contains("Views/MainView.xaml"));
    Ok(())
}

#[test]
fn test_localize_quiet_prints_nothing() -> Result<()> {
    let test = project()?;

    let output = test.localize_command().arg("--quiet").output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(test.root().join("out/messages.pot").exists());
    Ok(())
}

#[test]
fn test_localize_overwrites_previous_catalog() -> Result<()> {
    let test = project()?;
    test.write_file("out/messages.pot", "stale content\n")?;

    let output = test.localize_command().output()?;
    assert!(output.status.success());

    let content = test.read_file("out/messages.pot")?;
    assert!(content.starts_with(HEADER));
    assert!(!content.contains("stale"));
    Ok(())
}

#[test]
fn test_localize_syntax_error_fails() -> Result<()> {
    let test = project()?;
    test.write_file(
        "src/Broken.cs",
        "class Broken\n{\n    void M() { Texts.GetText(\"a\" }\n}\n",
    )?;

    let output = test.localize_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Broken.cs"));
    assert!(stdout.contains("contains errors"));
    assert!(!test.root().join("out/messages.pot").exists());
    Ok(())
}

#[test]
fn test_localize_malformed_markup_fails() -> Result<()> {
    let test = project()?;
    test.write_file("src/Views/Broken.xaml", "<Window><Grid></Window>\n")?;

    let output = test.localize_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout)?.contains("Broken.xaml"));
    assert!(!test.root().join("out/messages.pot").exists());
    Ok(())
}

#[test]
fn test_localize_missing_source_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.localize_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout)?.contains("Source directory not found"));
    Ok(())
}

#[test]
fn test_empty_source_directory_writes_header_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/notes.txt", "nothing to see")?;

    let output = test.localize_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("out/messages.pot")?, HEADER);
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("localize"));
    Ok(())
}

#[test]
fn test_missing_arguments_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["localize", "src"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
