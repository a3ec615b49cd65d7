//! DNS-over-HTTPS record resolution.
//!
//! Two interchangeable resolvers (MX and SPF/TXT) query an ordered list of
//! DNS-over-HTTPS providers in DNS-JSON format, failing over from one provider
//! to the next. Provider failures are recovered locally; the resolvers only
//! ever report "records" or "no records", never errors.

mod providers;
mod records;
mod types;

pub(crate) use providers::DohProvider;
pub(crate) use records::{get_mx_records, get_spf_record};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
