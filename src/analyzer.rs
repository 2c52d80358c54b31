use std::{
    collections::{HashMap, HashSet},
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{PeopleError, Result},
    models::Person,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub distinct_first_names: usize,
    pub min_age: i32,
    pub max_age: i32,
    pub top: usize,
    pub oldest: Vec<Person>,
    pub popular_last_names: Vec<(String, usize)>,
}

/// Reads the people file back. Lines that do not hold a valid person are skipped.
pub fn read_people(path: &Path) -> Result<Vec<Person>> {
    tracing::info!("Reading people from {}", path.display());
    let file = File::open(path).map_err(|e| PeopleError::io(path, e))?;
    parse_people(BufReader::new(file)).map_err(|e| match e {
        PeopleError::Io { source, .. } => PeopleError::io(path, source),
        other => other,
    })
}

pub fn parse_people(reader: impl BufRead) -> Result<Vec<Person>> {
    let mut people = Vec::new();
    // Raw bytes so a line with invalid UTF-8 is skipped like any other bad record
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| PeopleError::io("<people>", e))?;
        match serde_json::from_slice::<Person>(&line) {
            Ok(person) => people.push(person),
            Err(e) => tracing::debug!("Skipping line {}: {}", i + 1, e),
        }
    }
    Ok(people)
}

pub fn analyze(people: &[Person], top: usize) -> Report {
    let distinct_first_names = people
        .iter()
        .map(|p| p.first_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let min_age = people.iter().map(|p| p.age).min().unwrap_or(0);
    let max_age = people.iter().map(|p| p.age).max().unwrap_or(0);

    Report {
        distinct_first_names,
        min_age,
        max_age,
        top,
        oldest: oldest(people, top),
        popular_last_names: popular_last_names(people, top),
    }
}

/// `sort_by` is stable, so people of equal age keep their file order.
pub fn oldest(people: &[Person], top: usize) -> Vec<Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by(|a, b| b.age.cmp(&a.age));
    sorted.truncate(top);
    sorted
}

/// Counts last names, keeping groups in order of first appearance so that
/// equal counts rank by which surname showed up first.
pub fn popular_last_names(people: &[Person], top: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for person in people {
        match index.get(person.last_name.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(&person.last_name, counts.len());
                counts.push((person.last_name.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top);
    counts
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "There are {} distinct first names.",
            self.distinct_first_names
        )?;
        writeln!(f, "Minimum age is {}.", self.min_age)?;
        writeln!(f, "Maximum age is {}.", self.max_age)?;

        writeln!(f, "\nTop {} oldest people:", self.top)?;
        for person in &self.oldest {
            writeln!(f, "{person}")?;
        }

        writeln!(f, "\nTop {} most popular last names with frequency:", self.top)?;
        for (name, count) in &self.popular_last_names {
            writeln!(f, "({name}, {count})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixture() -> Vec<Person> {
        vec![
            Person::new("Anna", "Smith", 34),
            Person::new("Ben", "Jones", 71),
            Person::new("Anna", "Brown", 71),
            Person::new("Cleo", "Jones", 5),
            Person::new("Dan", "Smith", 88),
        ]
    }

    #[test]
    fn fixture_statistics() {
        let report = analyze(&fixture(), 3);

        assert_eq!(report.distinct_first_names, 4);
        assert_eq!(report.min_age, 5);
        assert_eq!(report.max_age, 88);
        assert_eq!(
            report.oldest,
            vec![
                Person::new("Dan", "Smith", 88),
                Person::new("Ben", "Jones", 71),
                Person::new("Anna", "Brown", 71),
            ]
        );
        assert_eq!(
            report.popular_last_names,
            vec![
                ("Smith".to_string(), 2),
                ("Jones".to_string(), 2),
                ("Brown".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_list_defaults_to_zero() {
        let report = analyze(&[], 3);

        assert_eq!(report.distinct_first_names, 0);
        assert_eq!(report.min_age, 0);
        assert_eq!(report.max_age, 0);
        assert!(report.oldest.is_empty());
        assert!(report.popular_last_names.is_empty());
    }

    #[test]
    fn fewer_records_than_top_n() {
        let people = vec![Person::new("Anna", "Smith", 34)];
        let report = analyze(&people, 3);

        assert_eq!(report.oldest, people);
        assert_eq!(report.popular_last_names, vec![("Smith".to_string(), 1)]);
    }

    #[test]
    fn skips_unparseable_lines() {
        let input = concat!(
            "{\"firstName\":\"Anna\",\"lastName\":\"Smith\",\"age\":34}\n",
            "not json\n",
            "\n",
            "{\"firstName\":\"Ben\"}\n",
            "{\"firstName\":\"Ben\",\"lastName\":\"Jones\",\"age\":71}\n",
        );
        let people = parse_people(Cursor::new(input)).unwrap();

        assert_eq!(
            people,
            vec![
                Person::new("Anna", "Smith", 34),
                Person::new("Ben", "Jones", 71),
            ]
        );
    }

    #[test]
    fn skips_lines_with_invalid_utf8() {
        let mut input = Vec::new();
        input.extend_from_slice(b"{\"firstName\":\"Anna\",\"lastName\":\"Smith\",\"age\":34}\n");
        input.extend_from_slice(b"\xff\xfe garbage\n");
        input.extend_from_slice(b"{\"firstName\":\"Ben\",\"lastName\":\"Jones\",\"age\":71}\r\n");

        let people = parse_people(Cursor::new(input)).unwrap();

        assert_eq!(
            people,
            vec![
                Person::new("Anna", "Smith", 34),
                Person::new("Ben", "Jones", 71),
            ]
        );
    }

    #[test]
    fn keeps_ages_outside_the_generated_range() {
        let input = concat!(
            "{\"firstName\":\"Anna\",\"lastName\":\"Smith\",\"age\":-3}\n",
            "{\"firstName\":\"Ben\",\"lastName\":\"Jones\",\"age\":0}\n",
        );
        let people = parse_people(Cursor::new(input)).unwrap();

        assert_eq!(people.len(), 2);
        let report = analyze(&people, 3);
        assert_eq!(report.min_age, -3);
        assert_eq!(report.max_age, 0);
    }

    #[test]
    fn report_prints_fixed_labels() {
        let text = analyze(&fixture(), 2).to_string();
        let expected = "\
There are 4 distinct first names.
Minimum age is 5.
Maximum age is 88.

Top 2 oldest people:
Person(firstName=Dan, lastName=Smith, age=88)
Person(firstName=Ben, lastName=Jones, age=71)

Top 2 most popular last names with frequency:
(Smith, 2)
(Jones, 2)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn generated_file_reads_back_unchanged() {
        use crate::generator::{Sampling, generate_people, write_people};
        use rand::{SeedableRng, rngs::StdRng};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.txt");
        let first: Vec<String> = ["Anna", "Ben", "Cleo"].map(String::from).to_vec();
        let last: Vec<String> = ["Smith", "Jones"].map(String::from).to_vec();

        let expected =
            generate_people(&first, &last, 100, Sampling::Uniform, &mut StdRng::seed_from_u64(5))
                .unwrap();
        write_people(&path, &first, &last, 100, Sampling::Uniform, &mut StdRng::seed_from_u64(5))
            .unwrap();

        assert_eq!(read_people(&path).unwrap(), expected);
    }

    #[test]
    fn missing_people_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_people(&dir.path().join("people.txt")).is_err());
    }
}
