//! Le build script.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::str;


/// File in the $OUT_DIR where the current revision is written.
const REVISION_FILE: &str = "revision";


fn main() -> Result<(), Box<dyn Error>> {
    // The file has to exist even if Git is unavailable,
    // since the binary pulls it in with include_str!().
    let out_dir = env::var("OUT_DIR")?;
    let rev_path = Path::new(&out_dir).join(REVISION_FILE);
    let mut revision_file = File::create(&rev_path)?;
    match git_head_sha() {
        Ok(rev) => revision_file.write_all(rev.as_bytes())?,
        Err(e) => println!("cargo:warning=Failed to obtain current Git SHA: {}", e),
    };
    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}

fn git_head_sha() -> Result<String, Box<dyn Error>> {
    let mut cmd = Command::new("git");
    cmd.args(["rev-parse", "--short", "HEAD"]);

    let output = cmd.output()?;
    if !output.status.success() {
        return Err("not a Git repository".into());
    }
    let sha = str::from_utf8(&output.stdout[..])?.trim().to_owned();
    Ok(sha)
}
