//! Integration tests for commands that write into a project

use fieldgen::GenError;
use fieldgen_cli::{
    FieldgenConfig, FlutterCommand, Invocation, ModelArgs, ServerCommand, ServerOutput,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn invocation(root: &Path) -> Invocation {
    Invocation {
        config: FieldgenConfig::default(),
        root: Some(root.to_path_buf()),
        interactive: false,
    }
}

fn model(name: &str, fields: &str) -> ModelArgs {
    ModelArgs {
        name: Some(name.to_string()),
        fields: Some(fields.to_string()),
    }
}

fn dao_command(force: bool) -> ServerCommand {
    ServerCommand::Dao {
        model: model("account", "email:z,active:b"),
        new_file: true,
        force,
    }
}

fn server_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"server\"\n").unwrap();
    fs::write(
        dir.path().join("src/lib.rs"),
        "pub mod dao;\npub mod models;\npub mod schema;\n\npub type ID = i64;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("src/dao.rs"),
        "//! DAO re-exports\n\npub use crate::user_dao::UserDao;\n",
    )
    .unwrap();
    dir
}

#[test]
fn flutter_model_is_written_once() {
    let dir = TempDir::new().unwrap();
    let command = FlutterCommand::Model {
        model: model("Todo", "title:z,done:b"),
    };

    let path = command.execute(&invocation(dir.path())).unwrap();
    assert_eq!(path, dir.path().join("lib/models/todo.dart"));
    assert!(fs::read_to_string(&path).unwrap().contains("class Todo extends Equatable"));

    let err = command.execute(&invocation(dir.path())).unwrap_err();
    let gen_err = err.downcast_ref::<GenError>().unwrap();
    assert!(matches!(gen_err, GenError::DestinationExists(_)));
    assert!(gen_err.is_warning());
}

#[test]
fn dao_new_file_registers_module() {
    let dir = server_project();

    let output = dao_command(false).execute(&invocation(dir.path())).unwrap();
    let ServerOutput::Files(files) = output else {
        panic!("expected written files");
    };
    assert_eq!(files.len(), 3);

    let dao = fs::read_to_string(dir.path().join("src/account_dao.rs")).unwrap();
    assert!(dao.starts_with("//! Dao implementation for account"));

    assert_eq!(
        fs::read_to_string(dir.path().join("src/lib.rs")).unwrap(),
        "pub mod dao;\npub mod models;\npub mod schema;\npub mod account_dao;\n\npub type ID = i64;\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("src/dao.rs")).unwrap(),
        "//! DAO re-exports\n\npub use crate::user_dao::UserDao;\npub use crate::account_dao::AccountDao;\n"
    );
}

#[test]
fn dao_new_file_refuses_overwrite_without_force() {
    let dir = server_project();
    dao_command(false).execute(&invocation(dir.path())).unwrap();

    let err = dao_command(false).execute(&invocation(dir.path())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GenError>(),
        Some(GenError::DestinationExists(_))
    ));
}

#[test]
fn forced_regeneration_keeps_registries_unique() {
    let dir = server_project();
    dao_command(false).execute(&invocation(dir.path())).unwrap();

    let output = dao_command(true).execute(&invocation(dir.path())).unwrap();
    assert_eq!(
        output,
        ServerOutput::Files(vec![dir.path().join("src/account_dao.rs")])
    );

    let lib = fs::read_to_string(dir.path().join("src/lib.rs")).unwrap();
    let reexports = fs::read_to_string(dir.path().join("src/dao.rs")).unwrap();
    assert_eq!(lib.matches("pub mod account_dao;").count(), 1);
    assert_eq!(reexports.matches("pub use crate::account_dao::AccountDao;").count(), 1);
}

#[test]
fn dao_registry_failure_keeps_written_module() {
    let dir = server_project();
    fs::remove_file(dir.path().join("src/lib.rs")).unwrap();
    fs::create_dir(dir.path().join("src/lib.rs")).unwrap();

    let err = dao_command(false).execute(&invocation(dir.path())).unwrap_err();

    assert!(format!("{err:#}").contains("registering it in"));
    assert!(!err.downcast_ref::<GenError>().is_some_and(GenError::is_warning));
    assert!(dir.path().join("src/account_dao.rs").is_file());
}

#[test]
fn from_sql_appends_to_models_file() {
    let dir = server_project();
    let ddl = dir.path().join("accounts.sql");
    fs::write(
        &ddl,
        "CREATE TABLE accounts (\n  id BIGSERIAL PRIMARY KEY,\n  email VARCHAR NOT NULL\n);\n",
    )
    .unwrap();
    fs::write(dir.path().join("src/models.rs"), "use crate::ID;\n").unwrap();

    let command = ServerCommand::FromSql {
        input: Some(ddl),
        stdout: false,
    };
    command.execute(&invocation(dir.path())).unwrap();

    let models = fs::read_to_string(dir.path().join("src/models.rs")).unwrap();
    assert!(models.starts_with("use crate::ID;\n\n#[doc(hidden)]\n"));
    assert!(models.contains("pub struct Account {\n    pub id: ID,\n    pub email: String,\n}\n"));
}

#[test]
fn from_sql_stdout_leaves_project_untouched() {
    let dir = TempDir::new().unwrap();
    let ddl = dir.path().join("todos.sql");
    fs::write(&ddl, "CREATE TABLE todos (\n  done BOOLEAN\n);").unwrap();

    let command = ServerCommand::FromSql {
        input: Some(ddl),
        stdout: true,
    };
    let output = command.execute(&invocation(dir.path())).unwrap();

    let ServerOutput::Source(source) = output else {
        panic!("expected printed source");
    };
    assert!(source.contains("pub struct Todo {"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn from_sql_without_table_is_a_warning() {
    let dir = server_project();
    let ddl = dir.path().join("alter.sql");
    fs::write(&ddl, "ALTER TABLE accounts ADD COLUMN age INT;").unwrap();

    let command = ServerCommand::FromSql {
        input: Some(ddl),
        stdout: false,
    };
    let err = command.execute(&invocation(dir.path())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GenError>(),
        Some(GenError::NoTableNameFound)
    ));
    assert!(!dir.path().join("src/models.rs").exists());
}

#[test]
fn to_api_type_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("account.rs");
    fs::write(
        &input,
        "pub struct Account {\n    pub id: ID,\n    pub email: String,\n}\n",
    )
    .unwrap();

    let command = ServerCommand::ToApiType { input: Some(input) };
    let ServerOutput::Source(source) = command.execute(&invocation(dir.path())).unwrap() else {
        panic!("expected printed source");
    };

    assert!(source.starts_with("impl ToApiType<Account> for models::Account {"));
}

#[test]
fn custom_layout_from_config() {
    let dir = TempDir::new().unwrap();
    let mut invocation = invocation(dir.path());
    invocation.config.flutter.lib_dir = "app".into();
    invocation.config.flutter.models_dir = "entities".into();

    let command = FlutterCommand::Model {
        model: model("UserProfile", "displayName:z"),
    };
    let path = command.execute(&invocation).unwrap();

    assert_eq!(path, dir.path().join("app/entities/user_profile.dart"));
}
