use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DECLARATION: &str = "\
IMPOSTO SOBRE A RENDA - PESSOA FÍSICA
Nome: MARIA DE SOUZA
CPF: 529.982.247-25
DECLARAÇÃO DE BENS E DIREITOS
SITUAÇÃO EM 31/12/2023 SITUAÇÃO EM 31/12/2024
01 11 Apartamento 500.000,00 550.000,00
01 11 Garagem 20.000,00 20.000,00
06 01 Conta corrente
Banco Z 1.500,00 2.250,75
DÍVIDAS E ÔNUS REAIS
";

fn irpf() -> Command {
    Command::cargo_bin("irpf").unwrap()
}

fn write_declaration(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn process_prints_csv_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_declaration(&dir, "decl.txt", DECLARATION);

    irpf()
        .args(["process", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("MARIA DE SOUZA,529.982.247-25,"))
        .stdout(predicate::str::contains(
            "grupo,codigo,descricao,situacao_2023,situacao_2024",
        ))
        .stdout(predicate::str::contains(
            "01,11,Apartamento,\"R$ 520.000,00\",\"R$ 570.000,00\"",
        ))
        .stdout(predicate::str::contains(
            ",,TOTAL,\"R$ 521.500,00\",\"R$ 572.250,75\"",
        ));
}

#[test]
fn process_writes_json_file() {
    let dir = TempDir::new().unwrap();
    let input = write_declaration(&dir, "decl.txt", DECLARATION);
    let output = dir.path().join("out.json");

    irpf()
        .args(["process", "--format", "json", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["summary"]["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["years"]["current"], "2024");
}

#[test]
fn process_reports_missing_section() {
    let dir = TempDir::new().unwrap();
    let input = write_declaration(&dir, "other.txt", "RENDIMENTOS\nnada\n");

    irpf()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DECLARAÇÃO DE BENS E DIREITOS"));
}

#[test]
fn process_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_declaration(&dir, "decl.docx", DECLARATION);

    irpf()
        .arg("process")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn batch_writes_summary() {
    let dir = TempDir::new().unwrap();
    write_declaration(&dir, "a.txt", DECLARATION);
    write_declaration(&dir, "b.txt", "sem seção\n");
    let out_dir = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    irpf()
        .args(["batch", "--summary", "--continue-on-error", "-j", "2", "--output-dir"])
        .arg(&out_dir)
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"));

    assert!(out_dir.join("a.csv").exists());
    assert!(!out_dir.join("b.csv").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("a.txt,success,MARIA DE SOUZA"));
    assert!(lines[2].starts_with("b.txt,error,"));
}

#[test]
fn config_init_and_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    irpf()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();

    irpf()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "export.currency_prefix", "BRL"])
        .assert()
        .success();

    irpf()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "export.currency_prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"BRL\""));
}
