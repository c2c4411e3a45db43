const FORWARDED_KEYS: [&str; 2] = ["LEADERBOARD_URL", "LEADERBOARD_KEY"];

fn main() {
    if let Ok(it) = dotenvy::dotenv_iter() {
        for item in it {
            if let Ok((key, value)) = item {
                if FORWARDED_KEYS.contains(&key.as_str()) {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=.env");
}
