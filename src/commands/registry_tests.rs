use super::*;
use crate::error::CommandError;

fn groups() -> Vec<CommandGroup> {
    vec![
        CommandGroup::new(
            "vendas",
            [
                ("abrir_escolha_comandos", CommandSpec::new("Abrir escolha").key("f1")),
                ("abrir_gaveta", CommandSpec::new("Abrir gaveta").key("ctrl+g")),
            ],
        ),
        CommandGroup::new(
            "caixa",
            [
                ("fechar_caixa", CommandSpec::new("Fechar caixa").key("f1")),
                ("sangria", CommandSpec::new("Sangria")),
            ],
        ),
    ]
}

#[test]
fn flattens_groups_in_order() {
    let registry = CommandRegistry::build(&groups(), true);
    let codes: Vec<&str> = registry.commands().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(
        codes,
        ["abrir_escolha_comandos", "abrir_gaveta", "fechar_caixa", "sangria"]
    );
    assert_eq!(registry.get("sangria").unwrap().group, "caixa");
    assert_eq!(registry.len(), 4);
}

#[test]
fn later_group_wins_key_collision() {
    let registry = CommandRegistry::build(&groups(), true);
    assert_eq!(registry.code_for_key("f1"), Some("fechar_caixa"));
    assert_eq!(registry.code_for_key("ctrl+g"), Some("abrir_gaveta"));
    assert_eq!(registry.keybinds().len(), 2);
}

#[test]
fn commands_without_key_are_not_indexed() {
    let registry = CommandRegistry::build(&groups(), false);
    assert!(registry.keybinds().values().all(|code| code != "sangria"));
}

#[test]
fn disabled_commands_are_listed_but_not_indexed() {
    let group = CommandGroup::new(
        "vendas",
        [
            ("desconto", CommandSpec::new("Desconto").key("f6").disabled()),
            ("venda_prazo", CommandSpec::new("Venda a prazo").key("f7")),
        ],
    );
    let registry = CommandRegistry::build(&[group], true);
    assert!(registry.get("desconto").is_some());
    assert_eq!(registry.code_for_key("f6"), None);
    assert_eq!(registry.code_for_key("f7"), Some("venda_prazo"));
}

#[test]
fn replaced_code_drops_its_old_key() {
    let first = CommandGroup::new("a", [("shared", CommandSpec::new("Old").key("f2"))]);
    let second = CommandGroup::new("b", [("shared", CommandSpec::new("New").key("f3"))]);
    let registry = CommandRegistry::build(&[first, second], false);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("shared").unwrap().group, "b");
    assert_eq!(registry.code_for_key("f2"), None);
    assert_eq!(registry.code_for_key("f3"), Some("shared"));
}

#[test]
fn groups_and_group_filter() {
    let registry = CommandRegistry::build(&groups(), false);
    assert_eq!(registry.groups(), ["vendas", "caixa"]);
    assert_eq!(registry.commands_in_group("caixa").len(), 2);
    assert!(registry.commands_in_group("estoque").is_empty());
}

#[test]
fn unique_codes_across_groups_pass() {
    assert!(ensure_unique_codes(&groups()).is_ok());
}

#[test]
fn duplicate_codes_across_groups_are_listed_once() {
    let first = CommandGroup::new("a", [("shared", CommandSpec::new("One"))]);
    let second = CommandGroup::new("b", [("shared", CommandSpec::new("Two"))]);
    let third = CommandGroup::new("c", [("shared", CommandSpec::new("Three"))]);
    assert_eq!(
        ensure_unique_codes(&[first, second, third]),
        Err(CommandError::DuplicateCode {
            codes: vec!["shared".to_string()]
        })
    );
}
