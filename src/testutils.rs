use super::*;
use std::fs;
use std::path::PathBuf;

/// Runs `test_method` against an empty build file with a random name inside `test_dir`.
pub fn with_default_test_file<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_file = test_dir.join(random_string() + "_build.ai");
    with_test_file_content(&test_file, "", test_method);
}

/// Writes `content` to `test_file` for the duration of `test_method`.
pub fn with_test_file_content<C, F>(test_file: &PathBuf, content: C, test_method: F)
where
    C: AsRef<[u8]>,
    F: Fn(&PathBuf),
{
    fs::write(test_file, content).unwrap();
    assert_eq!(test_file.is_file(), true);

    test_method(test_file);

    if test_file.is_file() {
        fs::remove_file(test_file).unwrap();
    }
}

/// Raw bytes of `file`, so byte-identical copies can be checked for any content.
pub fn read_file(file: &PathBuf) -> Vec<u8> {
    fs::read(file).unwrap()
}

pub fn dummy_apply_context() -> ApplyContext {
    ApplyContext {
        source_dir: PathBuf::from("dummy-source-dir"),
        target_dir: PathBuf::from("dummy-target-dir"),
        dry_run: false
    }
}

/// Runs `test_method` in a fresh directory under `./test_output`, removed afterwards.
pub fn with_default_test_directory<F>(test_method: F)
where
    F: Fn(&PathBuf),
{
    let test_dir = PathBuf::from("./test_output").join("apply".to_owned() + &random_string());
    if test_dir.is_dir() {
        fs::remove_dir_all(&test_dir).unwrap();
    }
    fs::create_dir_all(&test_dir).unwrap();

    test_method(&test_dir);

    fs::remove_dir_all(&test_dir).unwrap();
}

/// Hands out the path of a `data2`-like directory inside `test_dir` that does not exist yet.
/// Tests create it when they need one; it is removed afterwards either way.
pub fn with_default_output_directory<F>(test_dir: &PathBuf, test_method: F)
where
    F: Fn(&PathBuf),
{
    let output_directory = test_dir.join(random_string() + "_data2");
    assert_eq!(output_directory.exists(), false);

    test_method(&output_directory);

    if output_directory.is_dir() {
        fs::remove_dir_all(&output_directory).unwrap();
    }
}

pub fn random_string() -> String {
    rand::random::<u32>().to_string()
}
