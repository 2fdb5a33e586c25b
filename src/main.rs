// =========================================================
// Démonstration — multiensemble de premiers encodé en entier
// Scénario complet : mutations, algèbre, inclusion, JSON
// =========================================================

// ── Multiensemble ─────────────────────────────────────────
use prime_multiset::PrimeMultiset;
use prime_multiset::MultisetError;
use prime_multiset::{to_json_string, from_json_string};

// ── Stdlib & crates externes ──────────────────────────────
use env_logger::Env;
use log::{error, info, warn};
use std::time::Instant;

// ─────────────────────────────────────────────────────────
// Point d'entrée
//
// Niveau de log par défaut : info (surchargé par RUST_LOG,
// ex. RUST_LOG=trace pour voir chaque add/remove).
// ─────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let res = demonstration_mutations()
        .and_then(|_| demonstration_algebre())
        .and_then(|_| demonstration_inclusion())
        .and_then(|_| demonstration_json());

    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}

// ─────────────────────────────────────────────────────────
// [1] Opérations modifiantes
// ─────────────────────────────────────────────────────────

fn demonstration_mutations() -> Result<(), MultisetError> {
    info!("=== [1] Opérations modifiantes ===");

    let mut m = PrimeMultiset::new();
    m.add(2u32);
    m.add(2u32);
    m.add(3u32);
    info!("{{2, 2, 3}}           -> {}", m);
    info!("contains(2)         = {}", m.contains(2u32));
    info!("contains(5)         = {}", m.contains(5u32));

    match m.remove(5u32) {
        Err(e) => warn!("remove(5)           : {}", e),
        Ok(())  => info!("remove(5)           : retiré"),
    }

    m.discard(5u32);
    info!("discard(5)          -> {}", m);

    m.remove(2u32)?;
    info!("remove(2)           -> {}", m);

    m.clear();
    info!("clear()             -> {} (vide : {})", m, m.is_empty());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// [2] Algèbre : pgcd, ppcm, produit, quotient
// ─────────────────────────────────────────────────────────

fn demonstration_algebre() -> Result<(), MultisetError> {
    info!("=== [2] Opérations ensemblistes ===");

    let a = PrimeMultiset::from_primes([2u32, 2, 3]);
    let b = PrimeMultiset::from_primes([2u32, 3, 3]);
    info!("A = {}, B = {}", a, b);

    let t = Instant::now();
    info!("A & B = {}", &a & &b);
    info!("A | B = {}", &a | &b);
    info!("A + B = {}", &a + &b);
    info!("A - B = {}", &a - &b);
    info!("Quatre opérations : {:.3?}", t.elapsed());

    // Encodage hors de portée des entiers natifs
    let grand = PrimeMultiset::from_primes(std::iter::repeat(1_000_000_007u64).take(64));
    info!("1000000007^64 : encodage de {} bits", grand.encoding().bits());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// [3] Inclusion (divisibilité)
// ─────────────────────────────────────────────────────────

fn demonstration_inclusion() -> Result<(), MultisetError> {
    info!("=== [3] Inclusion ===");

    let petit = PrimeMultiset::from_primes([2u32, 3]);
    let grand = PrimeMultiset::from_primes([2u32, 2, 2, 3]);
    let autre = PrimeMultiset::from_primes([5u32]);

    info!("{{2, 3}} <  {{2, 2, 2, 3}} : {}", petit < grand);
    info!("{{2, 3}} <= {{2, 3}}       : {}", petit <= petit.clone());
    info!("{{2, 2, 2, 3}} > {{2, 3}}  : {}", grand > petit);
    info!("{{2, 3}} et {{5}} comparables : {}", petit.partial_cmp(&autre).is_some());
    Ok(())
}

// ─────────────────────────────────────────────────────────
// [4] Sérialisation de l'encodage
// ─────────────────────────────────────────────────────────

fn demonstration_json() -> Result<(), MultisetError> {
    info!("=== [4] Sérialisation JSON ===");

    let m = PrimeMultiset::from_primes([2u32, 7, 7, 11]);
    let raw = to_json_string(&m)?;
    info!("JSON : {}", raw.replace('\n', " "));

    let relu = from_json_string(&raw)?;
    info!("Relu : {} (identique : {})", relu, relu == m);

    match from_json_string("{\"encoding\": \"0\"}") {
        Err(e) => warn!("Encodage nul : {}", e),
        Ok(m)  => info!("Encodage nul accepté : {}", m),
    }
    Ok(())
}
