use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{plan_csv, rwl, setup_test_config, sparse_table, temp_out, write_temp};

const ROW_3: &str = "62112345\t\t\t3\t\t\t\t\t\t\t\t\t\t01/01/2025\t08:24\t01/01/2025\t08:36\t0,20\n";

#[test]
fn test_generate_prints_rows_on_stdout() {
    let cfg = setup_test_config("generate_stdout");

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "62112345", "-i", "1-5", "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains(ROW_3))
        .stdout(contains("✅").not())
        .stderr(contains("5 work-log rows generated"));
}

#[test]
fn test_generate_reads_interval_from_stdin() {
    let cfg = setup_test_config("generate_stdin");

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "62112345", "-d", "01/01/2025", "-s", "08:00",
            "-e", "10:00", "--mode", "tire-service",
        ])
        .write_stdin(sparse_table())
        .assert()
        .success()
        .stdout(contains("62112345\t\t\t11\t"))
        .stdout(contains("62112345\t\t\t7\t").not());
}

#[test]
fn test_generate_reads_interval_from_file() {
    let cfg = setup_test_config("generate_file");
    let table = write_temp("generate_file_table", "txt", &sparse_table());

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "1", "--from-file", &table, "-d", "02/01/2025",
            "-s", "08:00", "-e", "08:50",
        ])
        .assert()
        .success()
        .stdout(contains("1\t\t\t7\t"))
        .stdout(contains("1\t\t\t2\t").not());
}

#[test]
fn test_default_mode_comes_from_config() {
    let cfg = setup_test_config("default_mode_config");
    fs::write(&cfg, "default_mode: tire_service\n").unwrap();

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "1", "-d", "01/01/2025", "-s", "08:00", "-e",
            "10:00",
        ])
        .write_stdin(sparse_table())
        .assert()
        .success()
        .stdout(contains("1\t\t\t2\t"));
}

#[test]
fn test_generate_error_exits_with_failure() {
    let cfg = setup_test_config("generate_error");

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "1", "-i", "1-5", "-d", "01/01/2025", "-s",
            "09:00", "-e", "08:00",
        ])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Invalid time window"));

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "1", "-i", "1-5", "-d", "01/01/2025", "-s",
            "08:00", "-e", "08:03",
        ])
        .assert()
        .failure()
        .stderr(contains("At least one minute per sequence"));
}

#[test]
fn test_export_csv_and_json() {
    let cfg = setup_test_config("export_csv_json");
    let csv_out = temp_out("export_rows", "csv");
    let json_out = temp_out("export_rows", "json");

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "62112345", "-i", "1-5", "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00", "--export", "csv", "--file", &csv_out,
        ])
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("service_order,sequence_id,start_date"));
    assert!(content.contains("62112345,3,01/01/2025,08:24,01/01/2025,08:36,\"0,20\""));

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "62112345", "-i", "1 2", "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00", "--export", "json", "--file", &json_out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json_out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[1]["sequence_id"], 2);
    assert_eq!(rows[1]["duration_hours"], "0,50");
}

#[test]
fn test_export_xlsx() {
    let cfg = setup_test_config("export_xlsx");
    let out = temp_out("export_rows", "xlsx");

    rwl()
        .args([
            "--config", &cfg, "generate", "-o", "62112345", "-i", "1-5", "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00", "--export", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout("")
        .stderr(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_requires_file() {
    rwl()
        .args([
            "generate", "-o", "1", "-i", "1-5", "-d", "01/01/2025", "-s", "08:00", "-e", "09:00",
            "--export", "csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_auto_from_plan_csv() {
    let cfg = setup_test_config("auto_plan");
    let plan = write_temp("auto_plan", "csv", &plan_csv());

    rwl()
        .args([
            "--config", &cfg, "auto", "-o", "62112345", "--plan", &plan, "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00", "--mode", "tire_service",
        ])
        .assert()
        .success()
        .stdout(contains(
            "62112345\t\t\t2\t\t\t\t\t\t\t\t\t\t01/01/2025\t08:00\t01/01/2025\t08:30\t0,50\n",
        ))
        .stdout(contains(
            "62112345\t\t\t4\t\t\t\t\t\t\t\t\t\t01/01/2025\t08:30\t01/01/2025\t09:00\t0,50\n",
        ));

    rwl()
        .args([
            "--config", &cfg, "auto", "-o", "62112345", "--plan", &plan, "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("62112345\t\t\t1\t"))
        .stdout(contains("62112345\t\t\t3\t"));
}

#[test]
fn test_auto_with_custom_delimiter() {
    let cfg = setup_test_config("auto_delimiter");
    let plan = write_temp("auto_delimiter", "csv", &plan_csv().replace(';', ","));

    rwl()
        .args([
            "--config", &cfg, "auto", "-o", "1", "--plan", &plan, "--delimiter", ",", "-d",
            "01/01/2025", "-s", "08:00", "-e", "09:00", "--mode", "tire-service",
        ])
        .assert()
        .success()
        .stdout(contains("1\t\t\t2\t"));
}

#[test]
fn test_auto_reads_latin1_plan() {
    let cfg = setup_test_config("auto_latin1");
    let plan = temp_out("auto_latin1", "csv");
    // "Lubrificação" and "Calibração" in ISO-8859-1
    let mut bytes = b"no_seq;de_tarefa;de_sub_sist\n1;Lubrifica\xe7\xe3o;Chassis\n".to_vec();
    bytes.extend_from_slice(b"2;Calibra\xe7\xe3o dos pneus;Pneu\n");
    fs::write(&plan, bytes).unwrap();

    rwl()
        .args([
            "--config", &cfg, "auto", "-o", "1", "--plan", &plan, "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00", "--mode", "tire-service",
        ])
        .assert()
        .success()
        .stdout("1\t\t\t2\t\t\t\t\t\t\t\t\t\t01/01/2025\t08:00\t01/01/2025\t09:00\t1,00\n");

    rwl()
        .args(["--config", &cfg, "classify", "--plan", &plan, "--short"])
        .assert()
        .success()
        .stdout(contains("tire_service: 2"))
        .stdout(contains("general: 1"));
}

#[test]
fn test_auto_missing_plan_fails() {
    let cfg = setup_test_config("auto_missing_plan");
    let plan = temp_out("auto_missing_plan", "csv");

    rwl()
        .args([
            "--config", &cfg, "auto", "-o", "1", "--plan", &plan, "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot open plan file"));
}

#[test]
fn test_classify_short_output() {
    let cfg = setup_test_config("classify_short");

    rwl()
        .args(["--config", &cfg, "classify", "--short"])
        .write_stdin(sparse_table())
        .assert()
        .success()
        .stdout(contains("tire_service: 2 3 4 5 6 11 12 13"))
        .stdout(contains("general: 1 7 8 9 10"))
        .stderr(contains("13 rows, sparse layout"));
}

#[test]
fn test_classify_report_for_plan() {
    let cfg = setup_test_config("classify_plan");
    let plan = write_temp("classify_plan", "csv", &plan_csv());

    rwl()
        .args(["--config", &cfg, "classify", "--plan", &plan])
        .assert()
        .success()
        .stdout(contains("Tire service (2)"))
        .stdout(contains("General service (2)"))
        .stdout(contains("tire-keyword"));
}

#[test]
fn test_verbose_logs_on_stderr() {
    let cfg = setup_test_config("verbose_logs");

    rwl()
        .args([
            "--config", &cfg, "-v", "generate", "-o", "1", "-i", "1 2", "-d", "01/01/2025", "-s",
            "08:00", "-e", "09:00",
        ])
        .assert()
        .success()
        .stderr(contains("interval recognized"))
        .stdout(contains("interval recognized").not());
}
