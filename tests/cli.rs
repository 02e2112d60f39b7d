use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CFD22_INGRESO: &str = include_str!("fixtures/cfd22_ingreso.xml");
const CFDI32_EGRESO: &str = include_str!("fixtures/cfdi32_egreso.xml");
const CFDI32_TAX_FALLBACK: &str = include_str!("fixtures/cfdi32_tax_fallback.xml");

const CFD22_STEM: &str = "2013-05-14_AAA010101AAA_A_1234_1000.00_160.00_1160.00_ingreso_";
const EGRESO_UUID: &str = "6F2C3D4E-1A2B-4C5D-8E9F-0123456789AB";

fn renamecfd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("renamecfd").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn prints_help_without_files() {
    let temp_dir = TempDir::new().unwrap();

    renamecfd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--descuentos"))
        .stdout(predicate::str::contains("--UUID"));
}

#[test]
fn renames_cfd_ignoring_uuid_flag() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["-U", "factura.xml"])
        .assert()
        .success();

    assert_eq!(file_names(temp_dir.path()), vec![format!("{}.xml", CFD22_STEM)]);
}

#[test]
fn renames_credit_note_with_all_segments() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "nota.xml", CFDI32_EGRESO);
    write(temp_dir.path(), "nota.pdf", "%PDF-1.4");

    renamecfd(temp_dir.path())
        .args(["-r", "-d", "-U", "nota.xml"])
        .assert()
        .success();

    let stem = format!(
        "CCC030303CCC_2014-02-25_BBB020202BBB_NC_77_-500.00_-72.00_-522.00_-50.00_egreso_{}_",
        EGRESO_UUID
    );
    assert_eq!(
        file_names(temp_dir.path()),
        vec![format!("{}.pdf", stem), format!("{}.xml", stem)]
    );
}

#[test]
fn discount_segment_only_with_flag() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "con.xml", CFDI32_TAX_FALLBACK);

    renamecfd(temp_dir.path())
        .args(["-d", "con.xml"])
        .assert()
        .success();
    assert_eq!(
        file_names(temp_dir.path()),
        vec!["2015-08-12_DDD040404DDD___100.00_16.00_116.00_0_ingreso_.xml"]
    );

    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "sin.xml", CFDI32_TAX_FALLBACK);

    renamecfd(temp_dir.path()).arg("sin.xml").assert().success();
    assert_eq!(
        file_names(temp_dir.path()),
        vec!["2015-08-12_DDD040404DDD___100.00_16.00_116.00_ingreso_.xml"]
    );
}

#[test]
fn verbose_prints_each_rename() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["-v", "factura.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("factura.xml => {}.xml", CFD22_STEM)));
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["no-existe.xml", "factura.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-existe.xml does not exist"));

    assert_eq!(file_names(temp_dir.path()), vec![format!("{}.xml", CFD22_STEM)]);
}

#[test]
fn renames_latin1_invoice() {
    let temp_dir = TempDir::new().unwrap();
    let xml = CFD22_INGRESO
        .replacen("encoding=\"UTF-8\"", "encoding=\"ISO-8859-1\"", 1)
        .replace("EMPRESA EMISORA SA DE CV", "COMPA\u{d1}IA EMISORA SA DE CV");
    let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(&xml);
    fs::write(temp_dir.path().join("factura.xml"), &bytes).unwrap();

    renamecfd(temp_dir.path())
        .arg("factura.xml")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(file_names(temp_dir.path()), vec![format!("{}.xml", CFD22_STEM)]);
}

#[test]
fn unsupported_version_does_not_stop_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "a_nueva.xml",
        &CFD22_INGRESO.replace("version=\"2.2\"", "version=\"3.3\""),
    );
    write(temp_dir.path(), "b_factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["a_nueva.xml", "b_factura.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3.3"));

    assert_eq!(
        file_names(temp_dir.path()),
        vec![format!("{}.xml", CFD22_STEM), "a_nueva.xml".to_string()]
    );
}

#[test]
fn collision_leaves_xml_but_renames_pdf() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "copia.xml", CFD22_INGRESO);
    write(temp_dir.path(), "copia.pdf", "%PDF-1.4");
    write(temp_dir.path(), &format!("{}.xml", CFD22_STEM), CFD22_INGRESO);

    renamecfd(temp_dir.path()).arg("copia.xml").assert().success();

    assert_eq!(
        file_names(temp_dir.path()),
        vec![
            format!("{}.pdf", CFD22_STEM),
            format!("{}.xml", CFD22_STEM),
            "copia.xml".to_string(),
        ]
    );
}

#[test]
fn verbose_collision_is_explained() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "copia.xml", CFD22_INGRESO);
    write(temp_dir.path(), &format!("{}.xml", CFD22_STEM), CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["--output-format", "plain", "-v", "copia.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO: "))
        .stdout(predicate::str::contains("copia.xml left in place"));
}

#[test]
fn glob_pattern_is_expanded() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "uno.xml", CFD22_INGRESO);
    write(temp_dir.path(), "dos.xml", CFDI32_EGRESO);

    renamecfd(temp_dir.path()).arg("*.xml").assert().success();

    assert_eq!(
        file_names(temp_dir.path()),
        vec![
            format!("{}.xml", CFD22_STEM),
            "2014-02-25_BBB020202BBB_NC_77_-500.00_-72.00_-522.00_egreso_.xml".to_string(),
        ]
    );
}

#[test]
fn report_holds_only_the_latest_run() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["-o", "reporte.csv", "factura.xml"])
        .assert()
        .success();

    let first = fs::read_to_string(temp_dir.path().join("reporte.csv")).unwrap();
    assert_eq!(
        first,
        "2013-05-14,AAA010101AAA,A,1234,1000.00,160.00,1160.00,ingreso\n"
    );

    write(temp_dir.path(), "nota.xml", CFDI32_EGRESO);
    renamecfd(temp_dir.path())
        .args(["-o", "reporte.csv", "nota.xml"])
        .assert()
        .success();

    let second = fs::read_to_string(temp_dir.path().join("reporte.csv")).unwrap();
    assert_eq!(
        second,
        "2014-02-25,BBB020202BBB,NC,77,-500.00,-72.00,-522.00,egreso\n"
    );
}

#[test]
fn config_file_switches_on_segments() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "renamecfd.toml", "[naming]\nreceiver_tax_id = true\n");
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path()).arg("factura.xml").assert().success();

    let names = file_names(temp_dir.path());
    assert!(names.contains(&format!("XAXX010101000_{}.xml", CFD22_STEM)));
}

#[test]
fn broken_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "roto.toml", "[naming\n");
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["--config", "roto.toml", "factura.xml"])
        .assert()
        .code(1);

    assert!(temp_dir.path().join("factura.xml").exists());
}

#[test]
fn json_output_describes_renames() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "factura.xml", CFD22_INGRESO);

    renamecfd(temp_dir.path())
        .args(["--output-format", "json", "-v", "factura.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"rename\""))
        .stdout(predicate::str::contains("\"status\":\"absent\""));
}
