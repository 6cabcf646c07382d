use std::path::PathBuf;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let out_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/tips.csv"));

    if let Some(dir) = out_path.parent() {
        std::fs::create_dir_all(dir).expect("Failed to create output directory");
    }
    let mut writer = csv::Writer::from_path(&out_path).expect("Failed to create output file");
    writer
        .write_record(["total_bill", "tip", "sex", "smoker", "day", "time", "size"])
        .expect("Failed to write header");

    let days = ["Thur", "Fri", "Sat", "Sun"];
    let times = ["Lunch", "Dinner"];

    let mut n_rows = 0usize;
    for day in days {
        for time in times {
            // Weekend dinner parties run bigger bills than weekday lunches.
            let base_bill = match (day, time) {
                ("Sat" | "Sun", "Dinner") => 24.0,
                (_, "Dinner") => 20.0,
                _ => 15.0,
            };

            for _ in 0..8 {
                let sex = if rng.next_u64() % 2 == 0 { "Female" } else { "Male" };
                let smoker = if rng.next_f64() < 0.3 { "Yes" } else { "No" };
                let size = rng.gauss(2.6, 1.0).round().clamp(1.0, 6.0) as i64;

                let total_bill = rng.gauss(base_bill, 6.0).max(3.0);
                let tip_rate = rng.gauss(0.15, 0.04).clamp(0.05, 0.30);
                let tip = total_bill * tip_rate;

                writer
                    .write_record([
                        format!("{total_bill:.2}"),
                        format!("{tip:.2}"),
                        sex.to_string(),
                        smoker.to_string(),
                        day.to_string(),
                        time.to_string(),
                        size.to_string(),
                    ])
                    .expect("Failed to write row");
                n_rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {n_rows} rows to {}", out_path.display());
}
