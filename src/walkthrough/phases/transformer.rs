use crate::commentary::builder::code_excerpt;
use crate::foundation::core::Vec3;
use crate::foundation::error::WalkthroughResult;
use crate::walkthrough::context::PhaseArgs;
use crate::walkthrough::phase::Phase;

const BLOCK_SRC: &str = r#"class Block(nn.Module):
    def __init__(self, config):
        super().__init__()
        self.ln_1 = LayerNorm(config.n_embd, bias=config.bias)
        self.attn = CausalSelfAttention(config)
        self.ln_2 = LayerNorm(config.n_embd, bias=config.bias)
        self.mlp = MLP(config)

    def forward(self, x):
        x = x + self.attn(self.ln_1(x))
        x = x + self.mlp(self.ln_2(x))
        return x"#;

const BLOCK_LOOP_SRC: &str = r#"# In GPT.forward — loop through all transformer blocks:
for block in self.transformer.h:
    x = block(x)"#;

pub(crate) fn walkthrough(args: &mut PhaseArgs<'_>) -> WalkthroughResult<()> {
    let c = crate::commentary!(
        Phase::Transformer,
        "

And that's a complete transformer block!

",
        code_excerpt(BLOCK_SRC, Some("model.py — Block"), Some(94), None)?,
        "

These form the bulk of any GPT model and are repeated a number of times, with the output of one
block feeding into the next, continuing the residual pathway.

",
        code_excerpt(BLOCK_LOOP_SRC, Some("model.py — GPT.forward"), Some(180), None)?,
        "

As is common in deep learning, it's hard to say exactly what each of these layers is doing, but we
have some general ideas: the earlier layers tend to focus on learning
lower-level features and patterns, while the later layers learn to recognize and understand
higher-level abstractions and relationships. In the context of natural language processing, the
lower layers might learn grammar, syntax, and simple word associations, while the higher layers
might capture more complex semantic relationships, discourse structures, and context-dependent meaning.

"
    )?;
    args.set_initial_camera(
        Vec3::new(-135.531, 0.000, -353.905),
        Vec3::new(291.100, 13.600, 5.706),
    );
    args.set_commentary(c);
    Ok(())
}
