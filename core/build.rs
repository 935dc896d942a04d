use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

#[derive(Deserialize)]
struct CatalogFile {
    placeholder_image: String,
    images: ImageConfig,
    projects: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
struct ImageConfig {
    remote_hosts: Vec<String>,
}

#[derive(Deserialize)]
struct ProjectEntry {
    id: String,
    title: String,
    description: String,
    category: String,
    year: String,
    image: Option<String>,
    details: Option<DetailsEntry>,
    #[serde(default)]
    project_images: Vec<String>,
}

#[derive(Deserialize)]
struct DetailsEntry {
    overview: Option<String>,
    role: Option<String>,
    #[serde(default)]
    tools: Vec<String>,
    link: Option<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PROJECT_CATALOG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read project catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse project catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.projects.is_empty() {
        panic!("project catalog {} has no entries", catalog_path.display());
    }
    if catalog.images.remote_hosts.is_empty() {
        panic!(
            "project catalog {} lists no remote image hosts",
            catalog_path.display()
        );
    }

    let hosts: Vec<String> = catalog
        .images
        .remote_hosts
        .iter()
        .map(|host| host.trim().to_ascii_lowercase())
        .collect();
    check_image_url(&catalog.placeholder_image, &hosts, "placeholder_image", &catalog_path);
    validate_entries(&catalog.projects, &hosts, &catalog_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const PLACEHOLDER_IMAGE: &str = {};",
        rust_string(&catalog.placeholder_image)
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const REMOTE_IMAGE_HOSTS: &[&str] = &[{}];",
        hosts
            .iter()
            .map(|host| rust_string(host))
            .collect::<Vec<_>>()
            .join(", ")
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const PROJECT_CATALOG: &[ProjectRecord] = &[").unwrap();

    for entry in &catalog.projects {
        writeln!(&mut output, "    ProjectRecord {{").unwrap();
        writeln!(&mut output, "        id: {},", rust_string(&entry.id)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        description: {},", rust_string(&entry.description)).unwrap();
        writeln!(&mut output, "        category: {},", rust_string(&entry.category)).unwrap();
        writeln!(&mut output, "        year: {},", rust_string(&entry.year)).unwrap();
        writeln!(&mut output, "        image: {},", rust_option(entry.image.as_deref())).unwrap();
        match &entry.details {
            Some(details) => {
                writeln!(&mut output, "        details: Some(ProjectDetails {{").unwrap();
                writeln!(
                    &mut output,
                    "            overview: {},",
                    rust_option(details.overview.as_deref())
                )
                .unwrap();
                writeln!(
                    &mut output,
                    "            role: {},",
                    rust_option(details.role.as_deref())
                )
                .unwrap();
                writeln!(&mut output, "            tools: {},", rust_slice(&details.tools)).unwrap();
                writeln!(
                    &mut output,
                    "            link: {},",
                    rust_option(details.link.as_deref())
                )
                .unwrap();
                writeln!(&mut output, "        }}),").unwrap();
            }
            None => writeln!(&mut output, "        details: None,").unwrap(),
        }
        writeln!(
            &mut output,
            "        project_images: {},",
            rust_slice(&entry.project_images)
        )
        .unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("project_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PROJECT_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("projects/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_option(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn rust_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn check_image_url(raw: &str, hosts: &[String], what: &str, catalog_path: &Path) {
    let url = Url::parse(raw.trim()).unwrap_or_else(|err| {
        panic!(
            "{what} '{raw}' is not a valid URL in {}: {err}",
            catalog_path.display()
        )
    });
    if url.scheme() != "https" {
        panic!(
            "{what} '{raw}' must use https in {}",
            catalog_path.display()
        );
    }
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !hosts.iter().any(|allowed| *allowed == host) {
        panic!(
            "{what} host '{host}' is not listed in [images] remote_hosts in {}",
            catalog_path.display()
        );
    }
}

fn validate_entries(entries: &[ProjectEntry], hosts: &[String], catalog_path: &Path) {
    let mut ids = HashSet::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            panic!("project id cannot be empty in {}", catalog_path.display());
        }
        if entry.title.trim().is_empty() {
            panic!(
                "project '{}' title cannot be empty in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if !ids.insert(entry.id.clone()) {
            panic!(
                "duplicate project id '{}' in {}",
                entry.id,
                catalog_path.display()
            );
        }
        if let Some(image) = entry.image.as_deref() {
            check_image_url(image, hosts, &format!("project '{}' image", entry.id), catalog_path);
        }
        for (index, image) in entry.project_images.iter().enumerate() {
            check_image_url(
                image,
                hosts,
                &format!("project '{}' project_images[{index}]", entry.id),
                catalog_path,
            );
        }
        if let Some(link) = entry.details.as_ref().and_then(|details| details.link.as_deref()) {
            if Url::parse(link.trim()).is_err() {
                panic!(
                    "project '{}' link '{link}' is not a valid URL in {}",
                    entry.id,
                    catalog_path.display()
                );
            }
        }
    }
}
