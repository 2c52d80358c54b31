use rand::Rng;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{PeopleError, Result},
    models::{MAX_AGE, MIN_AGE, Person},
};

/// How an index into a name list is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Every entry of the list can be picked.
    #[default]
    Uniform,
    /// The last entry is never picked. Matches the legacy generator output.
    ExcludeLast,
}

impl Sampling {
    /// Exclusive upper index for a list of `len` names.
    fn upper_bound(self, len: usize, list: &'static str) -> Result<usize> {
        let bound = match self {
            Sampling::Uniform => len,
            Sampling::ExcludeLast => len.saturating_sub(1),
        };
        if bound == 0 {
            return Err(PeopleError::EmptyNames { list });
        }
        Ok(bound)
    }
}

pub fn generate_people<R: Rng>(
    first_names: &[String],
    last_names: &[String],
    count: u32,
    sampling: Sampling,
    rng: &mut R,
) -> Result<Vec<Person>> {
    // Checked before the loop so a zero count still fails
    let first_bound = sampling.upper_bound(first_names.len(), "first names")?;
    let last_bound = sampling.upper_bound(last_names.len(), "last names")?;

    let mut people = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let first_name = &first_names[rng.random_range(0..first_bound)];
        let last_name = &last_names[rng.random_range(0..last_bound)];
        let age = rng.random_range(MIN_AGE..=MAX_AGE);
        people.push(Person::new(first_name, last_name, age));
    }
    Ok(people)
}

/// Generates `count` people and writes them to `path` as one JSON object per
/// line, replacing the previous contents. Returns the number of records written.
pub fn write_people<R: Rng>(
    path: &Path,
    first_names: &[String],
    last_names: &[String],
    count: u32,
    sampling: Sampling,
    rng: &mut R,
) -> Result<usize> {
    tracing::info!("Creating people file {}", path.display());
    tracing::debug!(
        "Sampling {:?} from {} first names and {} last names",
        sampling,
        first_names.len(),
        last_names.len()
    );

    let start = std::time::Instant::now();

    let people = generate_people(first_names, last_names, count, sampling, rng)?;

    let file = File::create(path).map_err(|e| PeopleError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for person in &people {
        serde_json::to_writer(&mut writer, person)?;
        writer
            .write_all(b"\n")
            .map_err(|e| PeopleError::io(path, e))?;
    }
    writer.flush().map_err(|e| PeopleError::io(path, e))?;

    tracing::info!("People file created in {:?}", start.elapsed());

    Ok(people.len())
}
