#[cfg(test)]
mod membership;
#[cfg(test)]
mod recon;
