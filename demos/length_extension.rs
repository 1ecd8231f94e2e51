//! Forge a secret-prefix MAC with a length-extension attack

use sha256_forge::{Digest, ForgeConfig, Forger, Sha256, hash};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("SHA-256 Length Extension Example");
    println!("================================\n");

    // Server side: tag = SHA256(secret || message)
    let secret = b"server-side secret";
    let message = b"user=guest&role=viewer";
    let mut signer = Sha256::new();
    signer.absorb(secret);
    signer.absorb(message);
    let tag = signer.finalize();
    println!("Published message: {}", String::from_utf8_lossy(message));
    println!("Published tag:     {tag}");

    let verify = |candidate: &[u8], claimed: &Digest| {
        let mut keyed = secret.to_vec();
        keyed.extend_from_slice(candidate);
        hash(&keyed) == *claimed
    };

    // Attacker side: knows message and tag, guesses the secret length
    let config = ForgeConfig {
        min_original_len: message.len() as u64,
        max_original_len: message.len() as u64 + 64,
    };
    let forger = Forger::new(tag, config)?;
    let accepted = forger.find_accepted(b"&role=admin", |forgery| {
        let mut forged = message.to_vec();
        forged.extend_from_slice(&forgery.appended());
        verify(&forged, &forgery.digest)
    })?;

    match accepted {
        Some(forgery) => {
            println!(
                "\nAccepted with secret length {}",
                forgery.original_len - message.len() as u64
            );
            println!("Appended bytes: {}", hex::encode(forgery.appended()));
            println!("Forged tag:     {}", forgery.digest);
        }
        None => println!("\nNo guess was accepted"),
    }

    Ok(())
}
