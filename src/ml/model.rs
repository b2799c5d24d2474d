use burn::{
    nn::{loss::CrossEntropyLossConfig, Initializer, Linear, LinearConfig},
    prelude::*,
    tensor::activation::softmax,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally; do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SpamModelConfig {
    pub num_features: usize,
    #[config(default = 2)]
    pub num_classes: usize,
}

impl SpamModelConfig {
    /// Zero-initialised weights: training starts from p = 0.5 for every text.
    pub fn init<B: Backend>(&self, device: &B::Device) -> SpamModel<B> {
        let linear = LinearConfig::new(self.num_features, self.num_classes)
            .with_initializer(Initializer::Zeros)
            .init(device);
        SpamModel { linear }
    }
}

/// Two-class logistic regression: one linear layer, softmax output.
#[derive(Module, Debug)]
pub struct SpamModel<B: Backend> {
    pub linear: Linear<B>,
}

impl<B: Backend> SpamModel<B> {
    /// features: [batch, num_features] → logits: [batch, num_classes]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        self.linear.forward(features)
    }

    /// Mean cross-entropy of the batch, plus the logits for accuracy.
    pub fn forward_loss(
        &self,
        features: Tensor<B, 2>,
        labels:   Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(features);
        let ce = CrossEntropyLossConfig::new().init(&logits.device());
        let loss = ce.forward(logits.clone(), labels);
        (loss, logits)
    }

    /// Probability of the spam class (index 1), shape [batch]
    pub fn spam_probability(&self, features: Tensor<B, 2>) -> Tensor<B, 1> {
        let probs = softmax(self.forward(features), 1);
        let [batch_size, _] = probs.dims();
        probs.slice([0..batch_size, 1..2]).reshape([batch_size])
    }
}
