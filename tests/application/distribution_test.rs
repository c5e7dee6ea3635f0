use quizgen::application::services::{DistributionError, distribute};

fn domains(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn given_ten_questions_and_three_domains_when_distributing_then_first_domain_takes_remainder() {
    let shares = distribute(10, &domains(&["A", "B", "C"])).unwrap();

    let counts: Vec<(&str, u32)> = shares
        .iter()
        .map(|s| (s.domain.as_str(), s.count))
        .collect();
    assert_eq!(counts, vec![("A", 4), ("B", 3), ("C", 3)]);
}

#[test]
fn given_evenly_divisible_total_when_distributing_then_all_domains_equal() {
    let shares = distribute(9, &domains(&["A", "B", "C"])).unwrap();

    assert!(shares.iter().all(|s| s.count == 3));
}

#[test]
fn given_any_total_when_distributing_then_counts_sum_to_total_and_order_is_preserved() {
    let names = domains(&["alpha", "beta", "gamma", "delta"]);

    for total in 0..=25 {
        let shares = distribute(total, &names).unwrap();

        assert_eq!(shares.len(), names.len());
        assert_eq!(shares.iter().map(|s| i64::from(s.count)).sum::<i64>(), total);

        let base = (total / names.len() as i64) as u32;
        assert!(shares.iter().all(|s| s.count >= base));
        assert_eq!(shares[0].count, base + (total % names.len() as i64) as u32);
        for (share, name) in shares.iter().zip(&names) {
            assert_eq!(&share.domain, name);
        }
    }
}

#[test]
fn given_fewer_questions_than_domains_when_distributing_then_first_domain_takes_all() {
    let shares = distribute(2, &domains(&["A", "B", "C"])).unwrap();

    let counts: Vec<u32> = shares.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![2, 0, 0]);
}

#[test]
fn given_negative_total_when_distributing_then_fails() {
    let result = distribute(-1, &domains(&["A"]));

    assert!(matches!(result, Err(DistributionError::NegativeTotal(-1))));
}

#[test]
fn given_no_domains_when_distributing_then_fails() {
    let result = distribute(5, &[]);

    assert!(matches!(result, Err(DistributionError::NoDomains)));
}
