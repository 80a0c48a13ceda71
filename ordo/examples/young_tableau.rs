//! Fill a Young tableau, search it, and drain it in ascending order

use ordo::{BoundedArray, Result, YoungTableau};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (rows, columns) = (4, 4);
    let mut rng = StdRng::seed_from_u64(7);
    let mut elements = BoundedArray::<i64>::new(10)?;
    elements.randomize_default(&mut rng);
    println!("Elements: {elements}");

    let mut tableau = YoungTableau::from_elements(rows, columns, elements.as_slice())?;
    println!("Tableau with {} of {} cells used:", tableau.records(), rows * columns);
    print!("{tableau}");

    tableau.insert(0)?;
    println!("After inserting 0, minimum is {}", tableau.minimum());

    for key in [0, 15, 31] {
        match tableau.locate(key) {
            Some((row, column)) => println!("{key} found at ({row}, {column})"),
            None => println!("{key} not present"),
        }
    }

    print!("Ascending:");
    while let Ok(min) = tableau.extract_min() {
        print!(" {min}");
    }
    println!();

    Ok(())
}
