use std::io::Write;
use std::path::{Path, PathBuf};

/// Five scattered samples: the corners of the unit square plus its center.
pub const FIVE_POINTS: &str = "x,y,z\n0,0,0\n1,0,1\n0,1,1\n1,1,2\n0.5,0.5,1\n";

/// Samples of the plane z = 2x + 3y + 1 on a 4x4 lattice.
pub fn plane_csv() -> String {
    let mut s = String::from("x,y,z\n");
    for j in 0..4 {
        for i in 0..4 {
            let (x, y) = (i as f64, j as f64);
            s.push_str(&format!("{x},{y},{}\n", 2.0 * x + 3.0 * y + 1.0));
        }
    }
    s
}

/// Write `contents` to `<dir>/<name>` and return the path.
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).expect("create csv");
    f.write_all(contents.as_bytes()).expect("write csv");
    path
}

/// Names of the files in `dir`, sorted.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// `n` reproducible pseudo-random locations strictly inside the unit square.
pub fn scattered_unit_points(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut state = seed;
    let mut next = move || {
        // 64-bit LCG (Knuth MMIX constants); the top 53 bits form the fraction.
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 + 0.5) / (1u64 << 53) as f64
    };
    (0..n).map(|_| [next(), next()]).collect()
}
