use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

// Pinned to the PDFium build matching the pdfium-render feature flag
const PDFIUM_VERSION: &str = "chromium/7543";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Previews are the only consumer of PDFium
    if env::var("CARGO_FEATURE_THUMBNAILS").is_err() {
        return;
    }

    let Ok(target) = env::var("TARGET") else {
        return;
    };
    let Some((platform, arch, lib_name)) = platform_triple(&target) else {
        println!("cargo:warning=No prebuilt PDFium for {target}; previews need a system library");
        return;
    };

    let Some(pdfium_dir) = vendor_dir() else {
        println!("cargo:warning=Could not locate workspace root; skipping PDFium download");
        return;
    };
    let lib_path = pdfium_dir.join("lib").join(lib_name);
    println!("cargo:rerun-if-changed={}", lib_path.display());

    if lib_path.exists() {
        return;
    }

    // PDFium is bound at runtime, so a failed download only disables previews
    match install(platform, arch, &pdfium_dir) {
        Ok(()) if lib_path.exists() => {
            println!(
                "cargo:warning=PDFium installed to {}",
                pdfium_dir.display()
            );
        }
        Ok(()) => {
            println!(
                "cargo:warning=PDFium archive did not contain {}",
                lib_path.display()
            );
        }
        Err(e) => {
            println!("cargo:warning=PDFium download failed ({e}); previews need a system library");
        }
    }
}

fn platform_triple(target: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let arch = if target.contains("aarch64") {
        "arm64"
    } else if target.contains("i686") {
        "x86"
    } else {
        "x64"
    };

    if target.contains("apple") {
        Some(("mac", arch, "libpdfium.dylib"))
    } else if target.contains("linux") {
        Some(("linux", arch, "libpdfium.so"))
    } else if target.contains("windows") {
        Some(("win", arch, "pdfium.dll"))
    } else {
        None
    }
}

fn vendor_dir() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").ok()?);
    let workspace_root = manifest_dir.parent()?.parent()?;
    Some(workspace_root.join("vendor").join("pdfium"))
}

fn install(platform: &str, arch: &str, pdfium_dir: &Path) -> Result<(), Box<dyn Error>> {
    let url = format!(
        "https://github.com/bblanchon/pdfium-binaries/releases/download/{PDFIUM_VERSION}/pdfium-{platform}-{arch}.tgz"
    );
    println!("cargo:warning=Downloading PDFium from {url}");

    fs::create_dir_all(pdfium_dir)?;
    let archive = env::temp_dir().join(format!("pdfium-{platform}-{arch}.tgz"));

    download_file(&url, &archive)?;
    let extracted = extract_tarball(&archive, pdfium_dir);
    let _ = fs::remove_file(&archive);
    extracted
}

fn download_file(url: &str, dest: &Path) -> Result<(), Box<dyn Error>> {
    use std::io::Write;

    let response = ureq::get(url).call()?;
    let mut file = fs::File::create(dest)?;
    std::io::copy(&mut response.into_reader(), &mut file)?;
    file.flush()?;
    Ok(())
}

fn extract_tarball(tarball: &Path, dest: &Path) -> Result<(), Box<dyn Error>> {
    use flate2::read::GzDecoder;
    use tar::Archive;

    let tar_gz = fs::File::open(tarball)?;
    let mut archive = Archive::new(GzDecoder::new(tar_gz));
    archive.unpack(dest)?;
    Ok(())
}
