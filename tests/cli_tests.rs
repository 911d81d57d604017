mod common;

use common::{TestProject, DEMO_ROUTES};
use waymark::cli::{run_cli, Cli, Commands, ConfigOpts};

fn opts(project: &TestProject) -> ConfigOpts {
    ConfigOpts {
        config: None,
        root: Some(project.root().to_path_buf()),
        routes_file: None,
    }
}

#[test]
fn test_check_accepts_a_valid_routes_file() {
    let project = TestProject::new(DEMO_ROUTES);
    let cli = Cli {
        command: Commands::Check {
            opts: opts(&project),
        },
    };
    run_cli(cli).expect("check failed on a valid routes file");
}

#[test]
fn test_check_rejects_a_broken_routes_file() {
    let project = TestProject::new("FETCH /test app.index\n");
    let cli = Cli {
        command: Commands::Check {
            opts: opts(&project),
        },
    };
    let err = run_cli(cli).expect_err("check passed on a broken routes file");
    assert!(err.to_string().contains("unrecognised HTTP verb"));
}

#[test]
fn test_routes_command_compiles_the_table() {
    let project = TestProject::new(DEMO_ROUTES);
    let cli = Cli {
        command: Commands::Routes {
            opts: opts(&project),
        },
    };
    run_cli(cli).expect("routes command failed");
}

#[test]
fn test_reverse_command_resolves_named_parameters() {
    let project = TestProject::new(DEMO_ROUTES);
    let cli = Cli {
        command: Commands::Reverse {
            opts: opts(&project),
            action: "demos.index".to_string(),
            params: vec!["test=something".to_string()],
        },
    };
    run_cli(cli).expect("reverse command failed");
}

#[test]
fn test_reverse_command_reports_unknown_actions() {
    let project = TestProject::new(DEMO_ROUTES);
    let cli = Cli {
        command: Commands::Reverse {
            opts: opts(&project),
            action: "something.fake".to_string(),
            params: Vec::new(),
        },
    };
    let err = run_cli(cli).expect_err("reverse passed on an unknown action");
    assert!(err.to_string().contains("no matching action"));
}

#[test]
fn test_config_file_drives_the_commands() {
    let project = TestProject::new("");
    project.write("custom/site.routes", "GET / app.index\n");
    let config_file = project.write(
        "config/waymark.yaml",
        "routes_file: custom/site.routes\n",
    );
    let cli = Cli {
        command: Commands::Check {
            opts: ConfigOpts {
                config: Some(config_file),
                root: Some(project.root().to_path_buf()),
                routes_file: None,
            },
        },
    };
    run_cli(cli).expect("check failed with a config file");
}
