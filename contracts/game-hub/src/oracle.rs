//! Proof verification capability consumed by `submit_result`.

use soroban_sdk::{Address, Bytes, Env};

use crate::types::{GameProof, ScoreOutput};
use crate::{Error, ScoreVerifierClient};

/// Size of one public-input field element.
const FIELD_BYTES: u32 = 32;

/// Verifies a game-run proof and yields its public output.
pub trait ProofOracle {
    fn verify(&self, proof: &GameProof) -> Result<ScoreOutput, Error>;
}

/// Oracle backed by the configured verifier contract.
///
/// The verifier traps on a bad proof; the call is made with `try_` so the trap
/// surfaces as `InvalidProof` instead of aborting the invocation.
pub struct VerifierOracle<'a> {
    env: &'a Env,
    verifier: Address,
}

impl<'a> VerifierOracle<'a> {
    pub fn new(env: &'a Env, verifier: Address) -> Self {
        Self { env, verifier }
    }
}

impl ProofOracle for VerifierOracle<'_> {
    fn verify(&self, proof: &GameProof) -> Result<ScoreOutput, Error> {
        let client = ScoreVerifierClient::new(self.env, &self.verifier);
        match client.try_verify_proof(&proof.proof, &proof.public_inputs) {
            Ok(Ok(())) => decode_score(&proof.public_inputs),
            _ => Err(Error::InvalidProof),
        }
    }
}

/// Read the score from the first public input.
///
/// Inputs must be whole 32-byte big-endian field elements and the score must
/// fit in a `u64`.
pub fn decode_score(public_inputs: &Bytes) -> Result<ScoreOutput, Error> {
    let len = public_inputs.len();
    if len < FIELD_BYTES || len % FIELD_BYTES != 0 {
        return Err(Error::InvalidProof);
    }

    let mut field = [0u8; FIELD_BYTES as usize];
    public_inputs
        .slice(0..FIELD_BYTES)
        .copy_into_slice(&mut field);

    let (high, low) = field.split_at(24);
    if high.iter().any(|byte| *byte != 0) {
        return Err(Error::InvalidProof);
    }

    let mut score = [0u8; 8];
    score.copy_from_slice(low);
    Ok(ScoreOutput {
        score: u64::from_be_bytes(score),
    })
}

/// Encode a score as the first public input, the inverse of [`decode_score`].
///
/// Used by clients and tests to build public inputs.
pub fn encode_score(env: &Env, score: u64) -> Bytes {
    let mut field = [0u8; FIELD_BYTES as usize];
    field[24..].copy_from_slice(&score.to_be_bytes());
    Bytes::from_array(env, &field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_score_field() {
        let env = Env::default();
        let inputs = encode_score(&env, 1_234_567);
        assert_eq!(decode_score(&inputs), Ok(ScoreOutput { score: 1_234_567 }));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let env = Env::default();
        let mut inputs = encode_score(&env, 42);
        inputs.append(&Bytes::from_array(&env, &[0x7fu8; 32]));
        assert_eq!(decode_score(&inputs), Ok(ScoreOutput { score: 42 }));
    }

    #[test]
    fn rejects_short_or_ragged_inputs() {
        let env = Env::default();
        assert_eq!(decode_score(&Bytes::new(&env)), Err(Error::InvalidProof));
        assert_eq!(
            decode_score(&Bytes::from_array(&env, &[0u8; 31])),
            Err(Error::InvalidProof)
        );
        assert_eq!(
            decode_score(&Bytes::from_array(&env, &[0u8; 40])),
            Err(Error::InvalidProof)
        );
    }

    #[test]
    fn rejects_score_wider_than_u64() {
        let env = Env::default();
        let mut field = [0u8; 32];
        field[23] = 1;
        assert_eq!(
            decode_score(&Bytes::from_array(&env, &field)),
            Err(Error::InvalidProof)
        );
    }
}
