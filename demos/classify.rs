use binclass::metrics::{error_rate, f1_score, precision_score, recall_score};
use binclass::{Dataset, LinearRegression, LogisticRegression, Matrix, Model, NaiveBayes, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Usage: cargo run --example classify [DATASET] [SEED]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let seed: u64 = match args.next() {
        Some(seed) => seed.parse()?,
        None => 42,
    };
    let mut rng = StdRng::seed_from_u64(seed);

    // Step 1: load the dataset, or make one up
    let dataset = match path {
        Some(path) => Dataset::load(path)?,
        None => synthetic(&mut rng, 200, 4, 3)?,
    };
    println!(
        "Dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    // Step 2: stratified train/test split
    let (train, test) = dataset.stratified_split(0.8, &mut rng)?;
    println!("Training samples: {}", train.n_samples());
    println!("Test samples: {}", test.n_samples());

    let (train_x, test_x) = (train.x(), test.x());
    let domain_size = dataset.features.fold(0.0_f64, |acc, &v| acc.max(v)) as usize + 1;

    // Step 3: train and evaluate each model
    let mut bayes = NaiveBayes::new(dataset.n_features(), domain_size);
    bayes.train(&train_x, &train.labels)?;
    report("Naive Bayes", &test.labels, &bayes.predict(&test_x)?)?;

    let mut logistic = LogisticRegression::new().random_state(seed);
    logistic.train(&train_x, &train.labels)?;
    report("Logistic Regression", &test.labels, &logistic.predict(&test_x)?)?;

    let mut linear = LinearRegression::new();
    linear.train(&train_x, &train.labels)?;
    let scores = linear.predict(&test_x)?;
    report(
        "Linear Regression (thresholded)",
        &test.labels,
        &scores.mapv(|s| if s > 0.5 { 1.0 } else { 0.0 }),
    )?;

    Ok(())
}

fn report(name: &str, y_true: &Vector, y_pred: &Vector) -> binclass::Result<()> {
    println!("\n{name}:");
    println!("  Error rate: {:.3}", error_rate(y_true, y_pred)?);
    println!("  Precision: {:.3}", precision_score(y_true, y_pred)?);
    println!("  Recall: {:.3}", recall_score(y_true, y_pred)?);
    println!("  F1-Score: {:.3}", f1_score(y_true, y_pred)?);
    Ok(())
}

/// Samples whose label mostly follows the majority of their feature values.
fn synthetic(rng: &mut StdRng, m: usize, k: usize, domain_size: usize) -> binclass::Result<Dataset> {
    let features = Matrix::from_shape_fn((m, k), |_| rng.gen_range(0..domain_size) as f64);
    let midpoint = (k * (domain_size - 1)) as f64 / 2.0;
    let labels: Vector = features
        .rows()
        .into_iter()
        .map(|row| {
            let noisy = row.sum() + rng.gen_range(-1.0..1.0);
            if noisy > midpoint { 1.0 } else { 0.0 }
        })
        .collect();

    Dataset::new(features, labels)
}
