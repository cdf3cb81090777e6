//! Report parsing driven the way the `check` command consumes it:
//! parse a results page, then split records into on-provider and
//! bypass candidates.

use cdnmap_core::recon::parse_report;

const RESULTS_PAGE: &str = r#"
<html><body>
<table>
  <tr><th>Domain</th><th>IP</th><th>AS / Provider</th></tr>
  <tr>
    <td>ns1.victim.example.</td>
    <td>203.0.113.53</td>
    <td>AS64500 SteadyDNS <span>Netherlands</span></td>
  </tr>
</table>
<table>
  <tr>
    <td>10 mail.victim.example.</td>
    <td>203.0.113.25</td>
    <td>AS64501 MailCo <span>Germany</span></td>
  </tr>
</table>
<table>
  <tr><td>"v=spf1 -all"</td></tr>
</table>
<table>
  <tr>
    <td>www.victim.example</td>
    <td>104.16.9.9</td>
    <td>AS13335 CloudFlare Inc. <span>United States</span></td>
  </tr>
  <tr>
    <td>staging.victim.example</td>
    <td>198.51.100.40</td>
    <td>AS64502 BareMetal Hosting <span>France</span></td>
  </tr>
</table>
</body></html>
"#;

#[test]
fn bypass_candidates_are_the_records_off_the_provider() {
    let report = parse_report("victim.example", RESULTS_PAGE).unwrap();

    let bypass: Vec<&str> = report
        .sections()
        .iter()
        .flat_map(|(_, records)| records.iter())
        .filter(|record| !record.mentions_provider("cloudflare"))
        .map(|record| record.domain.as_str())
        .collect();

    assert_eq!(
        bypass,
        vec![
            "staging.victim.example",
            "ns1.victim.example.",
            "10 mail.victim.example.",
        ]
    );
}

#[test]
fn provider_and_country_come_back_as_separate_fields() {
    let report = parse_report("victim.example", RESULTS_PAGE).unwrap();
    let edge = &report.host[0];

    assert_eq!(edge.asn, "AS13335");
    assert_eq!(edge.provider, "CloudFlare Inc.");
    assert_eq!(edge.country, "United States");
    assert!(edge.mentions_provider("CLOUDFLARE"));
}

#[test]
fn txt_records_survive_as_free_text() {
    let report = parse_report("victim.example", RESULTS_PAGE).unwrap();
    assert_eq!(report.txt, vec![r#""v=spf1 -all""#]);
}
