// ============================================================
// Layer 5 — LSTM Regressor
// ============================================================
// The pretrained essay scoring network:
//
//   token ids [batch, seq_len]
//       │
//       ▼
//   Embedding (vocab_size → embed_dim)
//       │
//       ▼
//   LSTM (embed_dim → hidden_size), keep the final hidden state
//       │
//       ▼        features [batch, num_features]
//   concat ◄─────────────┘
//       │
//       ▼
//   Linear (hidden_size + num_features → hidden_size) + ReLU
//       │
//       ▼
//   Linear (hidden_size → 1)  →  score [batch]
//
// Reference: Burn Book §3 (Building Blocks)

use burn::{
    nn::{
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
        Lstm, LstmConfig,
    },
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct LstmRegressorConfig {
    #[config(default = 10000)]
    pub vocab_size:   usize,
    #[config(default = 100)]
    pub embed_dim:    usize,
    #[config(default = 64)]
    pub hidden_size:  usize,
    #[config(default = 27)]
    pub num_features: usize,
}

impl LstmRegressorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> LstmRegressor<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embed_dim).init(device);
        let lstm      = LstmConfig::new(self.embed_dim, self.hidden_size, true).init(device);
        let fc1       = LinearConfig::new(self.hidden_size + self.num_features, self.hidden_size)
            .init(device);
        let out       = LinearConfig::new(self.hidden_size, 1).init(device);
        LstmRegressor { embedding, lstm, fc1, out }
    }
}

#[derive(Module, Debug)]
pub struct LstmRegressor<B: Backend> {
    pub embedding: Embedding<B>,
    pub lstm:      Lstm<B>,
    pub fc1:       Linear<B>,
    pub out:       Linear<B>,
}

impl<B: Backend> LstmRegressor<B> {
    /// tokens: [batch, seq_len], features: [batch, num_features] → [batch]
    pub fn forward(&self, tokens: Tensor<B, 2, Int>, features: Tensor<B, 2>) -> Tensor<B, 1> {
        let [batch_size, _seq_len] = tokens.dims();

        let embedded = self.embedding.forward(tokens); // [batch, seq_len, embed_dim]

        // Only the last hidden state summarises the essay.
        let (_, state) = self.lstm.forward(embedded, None);
        let hidden = state.hidden; // [batch, hidden_size]

        let combined = Tensor::cat(vec![hidden, features], 1);
        let x = burn::tensor::activation::relu(self.fc1.forward(combined));

        self.out.forward(x).reshape([batch_size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::TensorData;

    type TestBackend = NdArray;

    fn small_config() -> LstmRegressorConfig {
        LstmRegressorConfig::new()
            .with_vocab_size(50)
            .with_embed_dim(8)
            .with_hidden_size(4)
            .with_num_features(27)
    }

    #[test]
    fn test_defaults_match_pretrained_architecture() {
        let cfg = LstmRegressorConfig::new();
        assert_eq!(cfg.vocab_size, 10000);
        assert_eq!(cfg.embed_dim, 100);
        assert_eq!(cfg.hidden_size, 64);
        assert_eq!(cfg.num_features, 27);
    }

    #[test]
    fn test_forward_shape_and_finite_output() {
        let device = Default::default();
        let model  = small_config().init::<TestBackend>(&device);

        let tokens = Tensor::<TestBackend, 2, Int>::from_data(
            TensorData::new(vec![1i64, 5, 9, 0, 0, 3, 3, 0, 0, 0], [2, 5]),
            &device,
        );
        let features = Tensor::<TestBackend, 2>::zeros([2, 27], &device);

        let out = model.forward(tokens, features);
        assert_eq!(out.dims(), [2]);

        let values = out.into_data().to_vec::<f32>().unwrap();
        assert!(values.iter().all(|v| v.is_finite()));
    }
}
