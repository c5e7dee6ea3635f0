/// One domain's slice of a requested question count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainShare {
    pub domain: String,
    pub count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("question count must be non-negative, got {0}")]
    NegativeTotal(i64),
    #[error("at least one domain is required")]
    NoDomains,
}

/// Split `total` questions across `domains`, in input order.
///
/// Every domain receives `total / n`; the first domain additionally absorbs
/// the remainder `total % n`, so the returned counts always sum to `total`.
pub fn distribute(total: i64, domains: &[String]) -> Result<Vec<DomainShare>, DistributionError> {
    if total < 0 {
        return Err(DistributionError::NegativeTotal(total));
    }
    if domains.is_empty() {
        return Err(DistributionError::NoDomains);
    }

    let n = domains.len() as i64;
    let base = (total / n) as u32;
    let remainder = (total % n) as u32;

    Ok(domains
        .iter()
        .enumerate()
        .map(|(i, domain)| DomainShare {
            domain: domain.clone(),
            count: if i == 0 { base + remainder } else { base },
        })
        .collect())
}
