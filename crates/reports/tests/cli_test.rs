use std::fs;

use clap::Parser;
use reports::cli::{run_check_doc, run_list, run_summary, Cli, Command};
use reports::shared::config::default_config;

const CUSTOMERS: &str = r#"[
  { "id": 1, "name": "Bruno", "document": "52998224725", "phone": "11987654321", "status": "active" },
  { "id": 2, "name": "Ana", "document": "11222333000181", "phone": "1133334444", "status": "inactive" },
  { "id": 3, "name": "Álvaro", "document": "123", "status": "active" }
]"#;

const SALES: &str = r#"[
  { "id": 1, "seller": { "name": "Rita" }, "totalAmount": 100, "status": "paid" },
  { "id": 2, "seller": { "name": "Rita" }, "totalAmount": 50.25, "status": "pending" },
  { "id": 3, "totalAmount": "x", "status": "paid" }
]"#;

fn write_input(contents: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

fn list(argv: &[&str]) -> String {
    let cli = Cli::try_parse_from(argv).unwrap();
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    run_list(&args, &default_config().unwrap()).unwrap()
}

#[test]
fn test_list_sorted_by_name_with_masks() {
    let (_dir, input) = write_input(CUSTOMERS);
    let output = list(&["reports", "list", "customers", &input]);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Clientes");
    assert!(lines[1].starts_with("Nome ▲"));
    assert!(lines[3].starts_with("Álvaro"));
    assert!(lines[4].starts_with("Ana"));
    assert!(lines[4].contains("11.222.333/0001-81"));
    assert!(lines[4].contains("(11) 3333-4444"));
    assert!(lines[5].contains("529.982.247-25"));
    assert!(lines[5].contains("(11) 98765-4321"));
    assert_eq!(*lines.last().unwrap(), "1-3 de 3 | Página 1 de 1");
}

#[test]
fn test_list_pagination_and_status_filter() {
    let (_dir, input) = write_input(CUSTOMERS);

    let output = list(&["reports", "list", "customers", &input, "--page", "2", "--page-size", "2"]);
    assert!(output.ends_with("3-3 de 3 | Página 2 de 2"));
    assert!(output.contains("Bruno"));

    let output = list(&["reports", "list", "customers", &input, "--status", "inactive"]);
    assert!(output.contains("Ana"));
    assert!(!output.contains("Bruno"));
    assert!(output.ends_with("1-1 de 1 | Página 1 de 1"));
}

#[test]
fn test_list_beyond_last_page_is_empty() {
    let (_dir, input) = write_input(CUSTOMERS);
    let output = list(&["reports", "list", "customers", &input, "--page", "9"]);
    assert!(output.contains("Nenhum registro encontrado."));
    assert!(output.ends_with("0 de 3 | Página 9 de 1"));
}

#[test]
fn test_list_actions_follow_role() {
    let (_dir, input) = write_input(CUSTOMERS);

    let viewer = list(&["reports", "list", "customers", &input, "--search", "bruno"]);
    assert!(viewer.contains("Visualizar"));
    assert!(!viewer.contains("Editar"));

    let admin = list(&["reports", "list", "customers", &input, "--search", "bruno", "--role", "admin"]);
    assert!(admin.contains("Editar"));
    assert!(admin.contains("Excluir"));
}

#[test]
fn test_summary_by_role() {
    let (_dir, input) = write_input(SALES);

    let summary = |role: &str| {
        let cli = Cli::try_parse_from(["reports", "summary", input.as_str(), "--role", role]).unwrap();
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        run_summary(&args).unwrap()
    };

    let seller = summary("seller");
    assert!(seller.contains("Total de registros: 3"));
    assert!(seller.contains("Pago: 2"));
    assert!(!seller.contains("Financeiro"));

    let admin = summary("admin");
    assert!(admin.contains("Valor total: R$ 150,25"));
    assert!(admin.contains("Rita: 2"));
    assert!(admin.contains("Sem responsável: 1"));
}

#[test]
fn test_check_doc() {
    let output = run_check_doc("11.222.333/0001-81");
    assert!(output.contains("Documento: 11.222.333/0001-81"));
    assert!(output.contains("Válido: sim"));

    let output = run_check_doc("111.111.111-11");
    assert!(output.contains("Válido: não"));
}
