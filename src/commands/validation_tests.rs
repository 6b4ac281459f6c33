use super::*;
use crate::error::CommandError;

fn command(code: &str, description: &str, key: Option<&str>) -> Command {
    Command {
        code: code.to_string(),
        description: description.to_string(),
        key: key.map(str::to_string),
        group: "vendas".to_string(),
        disabled: false,
    }
}

const KEY_RULES: &str = "Keys must follow the pattern in that order ctrl+shift+alt+key. All must be lowercase. And must have a non modifier key";

#[test]
fn valid_group_passes() {
    let group = CommandGroup::new(
        "vendas",
        [
            (
                "abrir_escolha_comandos",
                CommandSpec::new("Abrir escolha de comandos disponíveis").key("f1"),
            ),
            ("abrir_gaveta", CommandSpec::new("Abrir gaveta").key("ctrl+g")),
        ],
    );
    assert_eq!(validate(&group), Ok(()));
}

#[test]
fn missing_description_lists_every_code() {
    let commands = vec![
        command("a", "", Some("f1")),
        command("b", "Has one", None),
        command("c", "", None),
    ];
    let err = validate(&commands).unwrap_err();
    assert_eq!(
        err,
        CommandError::MissingDescription {
            codes: vec!["a".to_string(), "c".to_string()]
        }
    );
    assert_eq!(err.to_string(), "Commands without description a, c");
}

#[test]
fn whitespace_description_is_not_missing() {
    let commands = vec![
        command("a", " ", Some("f1")),
        command("b", "\t", None),
    ];
    assert_eq!(validate(&commands), Ok(()));
}

#[test]
fn duplicated_key_is_listed_once() {
    let commands = vec![
        command("abrir_escolha_comandos", "Abrir escolha", Some("f1")),
        command("abrir_gaveta", "Abrir gaveta", Some("f1")),
        command("fechar_caixa", "Fechar caixa", Some("f1")),
    ];
    let err = validate(&commands).unwrap_err();
    assert_eq!(err.to_string(), "Duplicated keys f1");
    assert_eq!(err.offenders(), ["f1"]);
}

#[test]
fn commands_without_keys_do_not_collide() {
    let commands = vec![
        command("sangria", "Sangria", None),
        command("suprimento", "Suprimento", None),
    ];
    assert!(validate(&commands).is_ok());
}

#[test]
fn duplicated_codes_are_rejected() {
    let commands = vec![
        command("abrir_escolha_comandos", "Abrir escolha", Some("f1")),
        command("abrir_escolha_comandos", "Abrir gaveta", Some("ctrl+g")),
    ];
    let err = validate(&commands).unwrap_err();
    assert_eq!(err.to_string(), "Duplicated codes abrir_escolha_comandos");
}

#[test]
fn invalid_codes_are_listed() {
    let commands = vec![
        command("Abrir", "Upper", None),
        command("1abrir", "Digit first", None),
        command("abrir-gaveta", "Dash", None),
        command("abrir_gaveta2", "Fine", None),
    ];
    let err = validate(&commands).unwrap_err();
    assert_eq!(
        err.offenders(),
        ["Abrir", "1abrir", "abrir-gaveta"]
    );
    assert!(err
        .to_string()
        .ends_with("Codes must be lowercase letters, numbers and underscores, starting with a letter"));
}

#[test]
fn wrong_modifier_order_is_rejected() {
    let commands = vec![command("abrir_escolha_comandos", "Abrir", Some("f1+ctrl"))];
    assert_eq!(
        validate(&commands).unwrap_err().to_string(),
        format!("Invalid key(s) f1+ctrl. {}", KEY_RULES)
    );
}

#[test]
fn modifier_only_key_is_rejected() {
    let commands = vec![command("abrir_escolha_comandos", "Abrir", Some("ctrl"))];
    assert_eq!(
        validate(&commands).unwrap_err().to_string(),
        format!("Invalid key(s) ctrl. {}", KEY_RULES)
    );
}

#[test]
fn punctuation_keys_are_accepted() {
    let commands = vec![
        command("comando1", "Um", Some("ctrl+a")),
        command("comando2", "Dois", Some("ctrl+b")),
        command("comando3", "Tres", Some("ctrl+/")),
        command("comando4", "Quatro", Some("ctrl+{")),
        command("comando5", "Cinco", Some("ctrl+.")),
    ];
    assert!(validate(&commands).is_ok());
}

#[test]
fn description_rule_runs_before_key_rules() {
    let commands = vec![
        command("a", "", Some("f1")),
        command("b", "B", Some("f1")),
    ];
    assert!(matches!(
        validate(&commands),
        Err(CommandError::MissingDescription { .. })
    ));
}

#[test]
fn code_pattern() {
    assert!(is_valid_code("a"));
    assert!(is_valid_code("abrir_gaveta_2"));
    assert!(!is_valid_code(""));
    assert!(!is_valid_code("_abrir"));
    assert!(!is_valid_code("abrir gaveta"));
}
