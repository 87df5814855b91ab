extern crate hbs_render;
use hbs_render::{Mode, RenderOptions, Renderer, YamlValue};

use std::{fs, collections::BTreeMap};
use serde::Deserialize;


#[test]
fn interpolation_test() -> Result<(), String> {
    run_spec_file("interpolation.yml", false)
}

#[test]
fn blocks_test() -> Result<(), String> {
    run_spec_file("blocks.yml", false)
}


fn run_spec_file(path: &str, log: bool) -> Result<(), String> {
    let spec = yaml_spec(path)?;
    [Mode::Release, Mode::Debug].iter().fold(
        Ok(()),
        |acc, mode| spec.tests.iter().fold(
            acc,
            |acc, test| match (acc, run_spec_test(test, *mode, log)) {
                (acc, Ok(())) => acc,
                (Ok(()), Err(name)) => Err(format!("specs ({}): {}", path, name)),
                (Err(err), Err(name)) => Err(format!("{}, {}", err, name))
            }
        )
    )
}

#[derive(Deserialize, Debug)]
struct YamlSpecFile {
    tests: Vec<YamlTestSpec>,
}

#[derive(Deserialize, Debug)]
struct YamlTestSpec {
    name: String,
    templates: BTreeMap<String, String>,
    template: String,
    data: YamlValue,
    expected: String,
}

fn yaml_spec(name: &str) -> Result<YamlSpecFile, String> {
    let path = format!("tests/specs/{}", name);
    let text = fs::read_to_string(path).map_err(
        |err| format!("io: {}", err)
    )?;
    serde_yaml::from_str::<YamlSpecFile>(&text).map_err(
        |err| format!("yaml: {}", err)
    )
}

fn run_spec_test(test: &YamlTestSpec, mode: Mode, log: bool) -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    for (name, source) in &test.templates {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
        fs::write(&path, source).map_err(|err| err.to_string())?;
    }

    let renderer = Renderer::with_options(RenderOptions::new(dir.path()), mode);
    let mut response = http::Response::new(Vec::new());
    renderer.prepare(&test.template, &test.data)
        .and_then(|task| task.render(&mut response))
        .map_err(|err| format!("{} ({:?}): {}", test.name, mode, err))?;

    let result = String::from_utf8_lossy(response.body());
    if result != test.expected {
        if log {
            println!("{} ({:?}): fail", test.name, mode);
            println!("expected:\n{}", test.expected);
            println!("received:\n{}\n", result);
        };
        Err(test.name.clone())
    } else {
        if log {
            println!("{} ({:?}): ok", test.name, mode);
        }
        Ok(())
    }
}
