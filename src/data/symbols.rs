//! Built-in LaTeX math token → unicode/text mappings
//!
//! These groups seed every `SymbolTable`. Keys are either backslash commands
//! (`\alpha`) or fixed literal expressions (`x^2`, `\frac{1}{2}`); a user
//! mapping file layered on top replaces entries with the same key.

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Insertion-ordered map with the fast hasher used across the crate
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Lowercase Greek letters
pub static GREEK_LOWERCASE: &[(&str, &str)] = &[
    (r"\alpha", "α"),
    (r"\beta", "β"),
    (r"\gamma", "γ"),
    (r"\delta", "δ"),
    (r"\epsilon", "ε"),
    (r"\varepsilon", "ε"),
    (r"\zeta", "ζ"),
    (r"\eta", "η"),
    (r"\theta", "θ"),
    (r"\vartheta", "ϑ"),
    (r"\iota", "ι"),
    (r"\kappa", "κ"),
    (r"\lambda", "λ"),
    (r"\mu", "μ"),
    (r"\nu", "ν"),
    (r"\xi", "ξ"),
    (r"\pi", "π"),
    (r"\varpi", "ϖ"),
    (r"\rho", "ρ"),
    (r"\varrho", "ϱ"),
    (r"\sigma", "σ"),
    (r"\varsigma", "ς"),
    (r"\tau", "τ"),
    (r"\upsilon", "υ"),
    (r"\phi", "φ"),
    (r"\varphi", "φ"),
    (r"\chi", "χ"),
    (r"\psi", "ψ"),
    (r"\omega", "ω"),
];

/// Uppercase Greek letters
pub static GREEK_UPPERCASE: &[(&str, &str)] = &[
    (r"\Gamma", "Γ"),
    (r"\Delta", "Δ"),
    (r"\Theta", "Θ"),
    (r"\Lambda", "Λ"),
    (r"\Xi", "Ξ"),
    (r"\Pi", "Π"),
    (r"\Sigma", "Σ"),
    (r"\Upsilon", "Υ"),
    (r"\Phi", "Φ"),
    (r"\Psi", "Ψ"),
    (r"\Omega", "Ω"),
];

/// Binary operators and operator-like symbols
pub static BINARY_OPERATORS: &[(&str, &str)] = &[
    (r"\pm", "±"),
    (r"\mp", "∓"),
    (r"\times", "×"),
    (r"\div", "÷"),
    (r"\cdot", "·"),
    (r"\ast", "∗"),
    (r"\star", "⋆"),
    (r"\circ", "∘"),
    (r"\bullet", "•"),
    (r"\cap", "∩"),
    (r"\cup", "∪"),
    (r"\sqcap", "⊓"),
    (r"\sqcup", "⊔"),
    (r"\vee", "∨"),
    (r"\wedge", "∧"),
    (r"\setminus", "∖"),
    (r"\wr", "≀"),
    (r"\diamond", "⋄"),
    (r"\bigtriangleup", "△"),
    (r"\bigtriangledown", "▽"),
    (r"\triangleleft", "◁"),
    (r"\triangleright", "▷"),
    (r"\lhd", "⊲"),
    (r"\rhd", "⊳"),
    (r"\unlhd", "⊴"),
    (r"\unrhd", "⊵"),
    (r"\oplus", "⊕"),
    (r"\ominus", "⊖"),
    (r"\otimes", "⊗"),
    (r"\oslash", "⊘"),
    (r"\odot", "⊙"),
    (r"\bigcirc", "◯"),
    (r"\dagger", "†"),
    (r"\ddagger", "‡"),
    (r"\amalg", "⨿"),
];

/// Relation symbols
pub static RELATIONS: &[(&str, &str)] = &[
    (r"\leq", "≤"),
    (r"\le", "≤"),
    (r"\geq", "≥"),
    (r"\ge", "≥"),
    (r"\equiv", "≡"),
    (r"\models", "⊨"),
    (r"\prec", "≺"),
    (r"\succ", "≻"),
    (r"\sim", "∼"),
    (r"\perp", "⊥"),
    (r"\preceq", "⪯"),
    (r"\succeq", "⪰"),
    (r"\simeq", "≃"),
    (r"\mid", "∣"),
    (r"\ll", "≪"),
    (r"\gg", "≫"),
    (r"\asymp", "≍"),
    (r"\parallel", "∥"),
    (r"\subset", "⊂"),
    (r"\supset", "⊃"),
    (r"\approx", "≈"),
    (r"\bowtie", "⋈"),
    (r"\subseteq", "⊆"),
    (r"\supseteq", "⊇"),
    (r"\cong", "≅"),
    (r"\sqsubset", "⊏"),
    (r"\sqsupset", "⊐"),
    (r"\neq", "≠"),
    (r"\ne", "≠"),
    (r"\smile", "⌣"),
    (r"\sqsubseteq", "⊑"),
    (r"\sqsupseteq", "⊒"),
    (r"\doteq", "≐"),
    (r"\frown", "⌢"),
    (r"\in", "∈"),
    (r"\ni", "∋"),
    (r"\propto", "∝"),
    (r"\vdash", "⊢"),
    (r"\dashv", "⊣"),
];

/// Arrows
pub static ARROWS: &[(&str, &str)] = &[
    (r"\leftarrow", "←"),
    (r"\gets", "←"),
    (r"\rightarrow", "→"),
    (r"\to", "→"),
    (r"\leftrightarrow", "↔"),
    (r"\uparrow", "↑"),
    (r"\downarrow", "↓"),
    (r"\updownarrow", "↕"),
    (r"\Leftarrow", "⇐"),
    (r"\Rightarrow", "⇒"),
    (r"\Leftrightarrow", "⇔"),
    (r"\Uparrow", "⇑"),
    (r"\Downarrow", "⇓"),
    (r"\Updownarrow", "⇕"),
    (r"\mapsto", "↦"),
    (r"\longmapsto", "⟼"),
    (r"\hookleftarrow", "↩"),
    (r"\hookrightarrow", "↪"),
    (r"\leftharpoonup", "↼"),
    (r"\leftharpoondown", "↽"),
    (r"\rightharpoonup", "⇀"),
    (r"\rightharpoondown", "⇁"),
    (r"\rightleftharpoons", "⇌"),
    (r"\iff", "⟺"),
];

/// Miscellaneous symbols
pub static MISC_SYMBOLS: &[(&str, &str)] = &[
    (r"\ldots", "…"),
    (r"\cdots", "⋯"),
    (r"\vdots", "⋮"),
    (r"\ddots", "⋱"),
    (r"\aleph", "ℵ"),
    (r"\prime", "′"),
    (r"\forall", "∀"),
    (r"\exists", "∃"),
    (r"\mho", "℧"),
    (r"\partial", "∂"),
    (r"\emptyset", "∅"),
    (r"\infty", "∞"),
    (r"\nabla", "∇"),
    (r"\triangle", "△"),
    (r"\Box", "□"),
    (r"\Diamond", "◊"),
    (r"\bot", "⊥"),
    (r"\top", "⊤"),
    (r"\angle", "∠"),
    (r"\surd", "√"),
    (r"\diamondsuit", "♦"),
    (r"\heartsuit", "♥"),
    (r"\clubsuit", "♣"),
    (r"\spadesuit", "♠"),
    (r"\neg", "¬"),
    (r"\lnot", "¬"),
    (r"\flat", "♭"),
    (r"\natural", "♮"),
    (r"\sharp", "♯"),
];

/// Large operators
pub static LARGE_OPERATORS: &[(&str, &str)] = &[
    (r"\sum", "∑"),
    (r"\prod", "∏"),
    (r"\coprod", "∐"),
    (r"\int", "∫"),
    (r"\oint", "∮"),
    (r"\bigcap", "⋂"),
    (r"\bigcup", "⋃"),
    (r"\bigsqcup", "⨆"),
    (r"\bigvee", "⋁"),
    (r"\bigwedge", "⋀"),
    (r"\bigodot", "⨀"),
    (r"\bigotimes", "⨂"),
    (r"\bigoplus", "⨁"),
    (r"\biguplus", "⨄"),
];

/// Common variables with superscripts, subscripts and call syntax
pub static SCRIPT_EXPRESSIONS: &[(&str, &str)] = &[
    (r"x^2", "x²"),
    (r"x^3", "x³"),
    (r"x^n", "xⁿ"),
    (r"x_i", "xᵢ"),
    (r"x_0", "x₀"),
    (r"x_1", "x₁"),
    (r"x_2", "x₂"),
    (r"x_n", "xₙ"),
    (r"a_i", "aᵢ"),
    (r"a_n", "aₙ"),
    (r"f(x)", "f(x)"),
    (r"g(x)", "g(x)"),
    (r"h(x)", "h(x)"),
    (r"F(x)", "F(x)"),
    (r"G(x)", "G(x)"),
    (r"H(x)", "H(x)"),
];

/// Fixed sums, integrals, fractions, roots and powers
pub static FIXED_EXPRESSIONS: &[(&str, &str)] = &[
    (r"\sum_{i=1}^n", "∑ᵢ₌₁ⁿ"),
    (r"\sum_{i=0}^n", "∑ᵢ₌₀ⁿ"),
    (r"\prod_{i=1}^n", "∏ᵢ₌₁ⁿ"),
    (r"\int_0^\infty", "∫₀^∞"),
    (r"\int_{-\infty}^\infty", "∫₋∞^∞"),
    (r"\int_a^b", "∫ₐᵇ"),
    (r"\frac{1}{2}", "½"),
    (r"\frac{1}{3}", "⅓"),
    (r"\frac{2}{3}", "⅔"),
    (r"\frac{1}{4}", "¼"),
    (r"\frac{3}{4}", "¾"),
    (r"\frac{1}{5}", "⅕"),
    (r"\frac{1}{6}", "⅙"),
    (r"\frac{1}{8}", "⅛"),
    (r"\frac{a}{b}", "a/b"),
    (r"\frac{x}{y}", "x/y"),
    (r"\sqrt{x}", "√x"),
    (r"\sqrt{2}", "√2"),
    (r"\sqrt{3}", "√3"),
    (r"\sqrt{n}", "√n"),
    (r"e^x", "eˣ"),
    (r"e^{-x}", "e⁻ˣ"),
    (r"e^{i\pi}", "e^(iπ)"),
    (r"2^n", "2ⁿ"),
    (r"10^n", "10ⁿ"),
];

/// Trigonometric and logarithmic function applications
pub static FUNCTION_EXPRESSIONS: &[(&str, &str)] = &[
    (r"\sin x", "sin x"),
    (r"\cos x", "cos x"),
    (r"\tan x", "tan x"),
    (r"\cot x", "cot x"),
    (r"\sec x", "sec x"),
    (r"\csc x", "csc x"),
    (r"\arcsin x", "arcsin x"),
    (r"\arccos x", "arccos x"),
    (r"\arctan x", "arctan x"),
    (r"\sinh x", "sinh x"),
    (r"\cosh x", "cosh x"),
    (r"\tanh x", "tanh x"),
    (r"\log x", "log x"),
    (r"\ln x", "ln x"),
    (r"\log_2 x", "log₂ x"),
    (r"\log_{10} x", "log₁₀ x"),
    (r"\lg x", "lg x"),
];

/// Set and relation expressions between two operands
pub static OPERATOR_EXPRESSIONS: &[(&str, &str)] = &[
    (r"A \times B", "A × B"),
    (r"A \cdot B", "A · B"),
    (r"a \leq b", "a ≤ b"),
    (r"a \geq b", "a ≥ b"),
    (r"a \neq b", "a ≠ b"),
    (r"a \approx b", "a ≈ b"),
    (r"a \equiv b", "a ≡ b"),
    (r"a \in B", "a ∈ B"),
    (r"a \notin B", "a ∉ B"),
    (r"A \subset B", "A ⊂ B"),
    (r"A \supset B", "A ⊃ B"),
    (r"A \subseteq B", "A ⊆ B"),
    (r"A \supseteq B", "A ⊇ B"),
    (r"A \cup B", "A ∪ B"),
    (r"A \cap B", "A ∩ B"),
    (r"A \setminus B", "A ∖ B"),
];
/// Operator names that typeset upright but carry no symbol
pub static OPERATOR_NAMES: &[(&str, &str)] = &[
    (r"\sin", "sin"),
    (r"\cos", "cos"),
    (r"\tan", "tan"),
    (r"\cot", "cot"),
    (r"\sec", "sec"),
    (r"\csc", "csc"),
    (r"\arcsin", "arcsin"),
    (r"\arccos", "arccos"),
    (r"\arctan", "arctan"),
    (r"\sinh", "sinh"),
    (r"\cosh", "cosh"),
    (r"\tanh", "tanh"),
    (r"\log", "log"),
    (r"\ln", "ln"),
    (r"\lg", "lg"),
    (r"\exp", "exp"),
    (r"\lim", "lim"),
    (r"\max", "max"),
    (r"\min", "min"),
    (r"\sup", "sup"),
    (r"\inf", "inf"),
    (r"\det", "det"),
    (r"\dim", "dim"),
    (r"\ker", "ker"),
    (r"\gcd", "gcd"),
    (r"\deg", "deg"),
    (r"\arg", "arg"),
];

/// Letter-like symbols and delimiters missing from the groups above
pub static EXTRA_SYMBOLS: &[(&str, &str)] = &[
    (r"\notin", "∉"),
    (r"\varnothing", "∅"),
    (r"\ell", "ℓ"),
    (r"\hbar", "ℏ"),
    (r"\Re", "ℜ"),
    (r"\Im", "ℑ"),
    (r"\wp", "℘"),
    (r"\dots", "…"),
    (r"\langle", "⟨"),
    (r"\rangle", "⟩"),
    (r"\lfloor", "⌊"),
    (r"\rfloor", "⌋"),
    (r"\lceil", "⌈"),
    (r"\rceil", "⌉"),
    (r"\longrightarrow", "⟶"),
    (r"\longleftarrow", "⟵"),
    (r"\Longrightarrow", "⟹"),
    (r"\Longleftarrow", "⟸"),
    (r"\implies", "⟹"),
    (r"\impliedby", "⟸"),
];

/// All groups in the order they appear in an exported mapping file
pub static DEFAULT_GROUPS: &[&[(&str, &str)]] = &[
    GREEK_LOWERCASE,
    GREEK_UPPERCASE,
    BINARY_OPERATORS,
    RELATIONS,
    ARROWS,
    MISC_SYMBOLS,
    LARGE_OPERATORS,
    SCRIPT_EXPRESSIONS,
    FIXED_EXPRESSIONS,
    FUNCTION_EXPRESSIONS,
    OPERATOR_EXPRESSIONS,
    OPERATOR_NAMES,
    EXTRA_SYMBOLS,
];

lazy_static! {
    /// Every built-in mapping, later groups winning on duplicate keys
    pub static ref DEFAULT_SYMBOLS: FxIndexMap<&'static str, &'static str> = {
        let mut m = FxIndexMap::default();
        for group in DEFAULT_GROUPS {
            for &(token, rendering) in group.iter() {
                m.insert(token, rendering);
            }
        }
        m
    };
}
