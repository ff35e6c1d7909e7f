mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::{Workspace, HEADER};
    use serde_json::json;
    use starter_writer::{error::Error, is_owned};
    use test_log::test;

    fn app_yml() -> Workspace {
        Workspace::new().with_template("app.yml.tmpl", "name: {{ Name }}")
    }

    #[test]
    fn writes_fresh_file_with_header() {
        let ws = app_yml();

        ws.writer(false, "").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
        assert_eq!(ws.read("app.yml").lines().collect::<Vec<_>>(), vec![HEADER, "name: demo"]);
        assert!(is_owned(ws.path("app.yml"), HEADER));
        assert_eq!(ws.output.prompt_count(), 0);
    }

    #[test]
    fn replaces_own_output_without_backup_in_both_modes() {
        for interactive in [false, true] {
            let ws = app_yml();
            ws.existing("app.yml", &format!("{HEADER}\nname: previous\n"));

            ws.writer(interactive, "")
                .write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"}))
                .unwrap();

            assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
            assert!(!ws.path("app.yml.old").exists());
            assert_eq!(ws.output.prompt_count(), 0);
        }
    }

    #[test]
    fn overwrites_foreign_file_without_backup_when_not_interactive() {
        let ws = app_yml();
        ws.existing("app.yml", "name: hand-written\n");

        ws.writer(false, "").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
        assert!(!ws.path("app.yml.old").exists());
        assert_eq!(ws.output.prompt_count(), 0);
    }

    #[test]
    fn interactive_overwrite_matches_non_interactive_result() {
        let ws = app_yml();
        ws.existing("app.yml", "name: hand-written\n");

        ws.writer(true, "o\n").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
        assert!(!ws.path("app.yml.old").exists());
        assert_eq!(ws.output.prompt_count(), 1);
    }

    #[test]
    fn interactive_rename_keeps_original_bytes() {
        let ws = app_yml();
        let original = "# mine\r\nname: hand-written\n\n";
        ws.existing("app.yml", original);

        ws.writer(true, "r\n").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        assert_eq!(std::fs::read(ws.path("app.yml.old")).unwrap(), original.as_bytes());
        assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
    }

    #[test]
    fn empty_answer_takes_rename_default() {
        let ws = app_yml();
        let original = "name: hand-written\n";
        ws.existing("app.yml", original);

        ws.writer(true, "\n").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        assert_eq!(ws.output.prompt_count(), 1);
        assert_eq!(std::fs::read(ws.path("app.yml.old")).unwrap(), original.as_bytes());
        assert_eq!(ws.read("app.yml"), format!("{HEADER}\nname: demo"));
    }

    #[test]
    fn interactive_prompt_repeats_on_unknown_answers() {
        let ws = app_yml();
        ws.existing("app.yml", "name: hand-written\n");

        ws.writer(true, "yes\n  R  \n")
            .write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"}))
            .unwrap();

        assert_eq!(ws.output.prompt_count(), 2);
        assert_eq!(ws.read("app.yml.old"), "name: hand-written\n");
    }

    #[test]
    fn writing_twice_is_idempotent() {
        let ws = app_yml();
        let context = json!({"Name": "demo"});

        ws.writer(true, "").write("app.yml.tmpl", "app.yml", &context).unwrap();
        let first = ws.read("app.yml");
        ws.writer(true, "").write("app.yml.tmpl", "app.yml", &context).unwrap();

        assert_eq!(ws.read("app.yml"), first);
        assert!(!ws.path("app.yml.old").exists());
        assert_eq!(ws.output.prompt_count(), 0);
    }

    #[test]
    fn body_after_header_equals_direct_render() {
        let ws = Workspace::new().with_template(
            "Procfile.tmpl",
            "{% for p in processes %}{{ p.name }}: {{ p.command }}\n{% endfor %}\n",
        );
        let context = json!({"processes": [
            {"name": "web", "command": "bundle exec puma"},
            {"name": "worker", "command": "bundle exec sidekiq"},
        ]});
        let mut writer = ws.writer(false, "");

        writer.write("Procfile.tmpl", "Procfile", &context).unwrap();
        let direct = writer.render("Procfile.tmpl", &context).unwrap();

        let written = ws.read("Procfile");
        let (first_line, body) = written.split_once('\n').unwrap();
        assert_eq!(first_line, HEADER);
        assert_eq!(body, direct);
    }

    #[test]
    fn second_rename_fails_when_backup_exists() {
        let ws = app_yml();
        ws.existing("app.yml", "name: first\n");
        ws.writer(true, "r\n").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"})).unwrap();

        ws.existing("app.yml", "name: second\n");
        let result =
            ws.writer(true, "r\n").write("app.yml.tmpl", "app.yml", &json!({"Name": "demo"}));

        assert!(matches!(result, Err(Error::BackupError { .. })));
        assert_eq!(ws.read("app.yml"), "name: second\n");
        assert_eq!(ws.read("app.yml.old"), "name: first\n");
    }

    #[test]
    fn render_error_is_returned() {
        let ws = app_yml();

        let result = ws.writer(false, "").write("app.yml.tmpl", "app.yml", &json!({}));

        assert!(matches!(result, Err(Error::RenderError { .. })));
        assert!(!is_owned(ws.path("app.yml"), HEADER));
    }
}
