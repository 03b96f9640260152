//! Trace recording via the core's observation hook.

use core::convert::TryInto;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use stepaes_core::{
    encrypt_block_observed, expand_key, pad, Block, CipherKey, RoundKeys, RoundStep, StepObserver,
    BLOCK_SIZE,
};

use crate::format::to_hex;

/// State snapshot taken after one transformation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Round index, `0..=Nr`.
    pub round: usize,
    /// Transformation that produced this state.
    #[serde(serialize_with = "ser_step")]
    pub step: RoundStep,
    /// Resulting 16-byte state.
    #[serde(serialize_with = "ser_block")]
    pub state: Block,
}

/// Complete trace of one block encryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockTrace {
    /// The (padded) input block.
    #[serde(serialize_with = "ser_block")]
    pub input: Block,
    /// Round keys fed into each AddRoundKey step, in round order.
    #[serde(serialize_with = "ser_blocks")]
    pub round_keys: Vec<Block>,
    /// Every intermediate state in execution order.
    pub steps: Vec<StepRecord>,
    /// State after the final round.
    #[serde(serialize_with = "ser_block")]
    pub ciphertext: Block,
}

fn ser_step<S: Serializer>(step: &RoundStep, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(step.name())
}

fn ser_block<S: Serializer>(block: &Block, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(block))
}

fn ser_blocks<S: Serializer>(blocks: &[Block], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(blocks.len()))?;
    for block in blocks {
        seq.serialize_element(&to_hex(block))?;
    }
    seq.end()
}

/// Observer that appends every reported step to a list.
#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    steps: Vec<StepRecord>,
}

impl StepRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the recorder, returning the collected steps.
    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }
}

impl StepObserver for StepRecorder {
    fn record(&mut self, round: usize, step: RoundStep, state: &Block) {
        self.steps.push(StepRecord {
            round,
            step,
            state: *state,
        });
    }
}

/// Encrypts one block while recording every intermediate state.
pub fn trace_block(block: &Block, round_keys: &RoundKeys) -> BlockTrace {
    let mut recorder = StepRecorder::new();
    let ciphertext = encrypt_block_observed(block, round_keys, &mut recorder);
    BlockTrace {
        input: *block,
        round_keys: round_keys.iter().copied().collect(),
        steps: recorder.into_steps(),
        ciphertext,
    }
}

/// Pads `data`, encrypts each block independently and returns the ciphertext
/// together with one trace per block.
///
/// The ciphertext is byte-identical to the untraced encryption path.
pub fn trace_encrypt(data: &[u8], key: &CipherKey) -> (Vec<u8>, Vec<BlockTrace>) {
    let round_keys = expand_key(key);
    let padded = pad(data);
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut traces = Vec::with_capacity(padded.len() / BLOCK_SIZE);
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let block: Block = chunk.try_into().expect("chunk length is sixteen");
        let trace = trace_block(&block, &round_keys);
        ciphertext.extend_from_slice(&trace.ciphertext);
        traces.push(trace);
    }
    (ciphertext, traces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepaes_core::{encrypt, encrypt_block, KeySize};

    const FIPS_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const FIPS_PLAIN: Block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    fn fips_round_keys() -> RoundKeys {
        let key = CipherKey::new(&FIPS_KEY, KeySize::Aes128).unwrap();
        expand_key(&key)
    }

    #[test]
    fn trace_covers_every_step_in_order() {
        let round_keys = fips_round_keys();
        let trace = trace_block(&FIPS_PLAIN, &round_keys);

        // Round 0 + 9 full rounds of 4 steps + final round of 3.
        assert_eq!(trace.steps.len(), 40);
        assert_eq!(trace.steps[0].round, 0);
        assert_eq!(trace.steps[0].step, RoundStep::AddRoundKey);
        assert_eq!(trace.steps[1].round, 1);
        assert_eq!(trace.steps[1].step, RoundStep::SubBytes);

        let last = trace.steps.last().unwrap();
        assert_eq!(last.round, 10);
        assert_eq!(last.step, RoundStep::AddRoundKey);
        assert_eq!(last.state, trace.ciphertext);

        // Final round has no MixColumns.
        assert!(trace
            .steps
            .iter()
            .filter(|s| s.round == 10)
            .all(|s| s.step != RoundStep::MixColumns));
    }

    #[test]
    fn traced_ciphertext_matches_plain_encryption() {
        let round_keys = fips_round_keys();
        let trace = trace_block(&FIPS_PLAIN, &round_keys);
        assert_eq!(trace.ciphertext, encrypt_block(&FIPS_PLAIN, &round_keys));
        assert_eq!(trace.round_keys.len(), 11);
        assert_eq!(&trace.round_keys[0][..], &FIPS_KEY[..]);
    }

    #[test]
    fn multi_block_trace_matches_padded_encrypt() {
        let key = CipherKey::new(&FIPS_KEY, KeySize::Aes128).unwrap();
        let message = [0x5au8; 20];
        let (ciphertext, traces) = trace_encrypt(&message, &key);
        assert_eq!(ciphertext, encrypt(&message, &key));
        assert_eq!(traces.len(), 2);
        assert_eq!(&traces[0].input[..], &message[..16]);
    }

    #[test]
    fn serializes_states_as_spaced_hex() {
        let round_keys = fips_round_keys();
        let trace = trace_block(&FIPS_PLAIN, &round_keys);
        let json = serde_json::to_string(&trace).expect("trace serializes");
        assert!(json.contains("\"step\":\"SubBytes\""));
        assert!(json.contains("\"ciphertext\":\"69 c4 e0 d8 6a 7b 04 30 d8 cd b7 80 70 b4 c5 5a\""));
    }
}
