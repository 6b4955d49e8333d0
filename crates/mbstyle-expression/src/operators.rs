//! Operator names, grouped by family.
//!
//! Each family is a closed enum; [`Operator::from_name`] is the only place a
//! name string turns into a variant, so one name can never belong to two
//! families.

use crate::types::Arity;
use std::fmt;

macro_rules! family {
    ($(#[$meta:meta])* $enum_name:ident { $($variant:ident => $op:literal, $arity:expr;)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $($variant,)*
        }

        impl $enum_name {
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $($enum_name::$variant => $op,)*
                }
            }

            pub fn arity(self) -> Arity {
                match self {
                    $($enum_name::$variant => $arity,)*
                }
            }
        }
    };
}

family! {
    /// Colour constructors.
    ColorOp {
        Rgb => "rgb", Arity::Fixed(3);
        Rgba => "rgba", Arity::Any;
        ToRgba => "to-rgba", Arity::Any;
    }
}

family! {
    /// Comparisons, boolean logic and conditionals.
    DecisionOp {
        Not => "!", Arity::Fixed(1);
        NotEqual => "!=", Arity::Fixed(2);
        Less => "<", Arity::Fixed(2);
        LessEqual => "<=", Arity::Fixed(2);
        Equal => "==", Arity::Fixed(2);
        Greater => ">", Arity::Fixed(2);
        GreaterEqual => ">=", Arity::Fixed(2);
        All => "all", Arity::AtLeast(1);
        Any => "any", Arity::AtLeast(1);
        Case => "case", Arity::AtLeast(2);
        Coalesce => "coalesce", Arity::AtLeast(1);
        Match => "match", Arity::AtLeast(3);
    }
}

family! {
    FeatureDataOp {
        GeometryType => "geometry-type", Arity::Fixed(0);
        Id => "id", Arity::Fixed(0);
        Properties => "properties", Arity::Fixed(0);
    }
}

family! {
    HeatmapOp {
        HeatmapDensity => "heatmap-density", Arity::Fixed(0);
    }
}

family! {
    /// Array and object access.
    LookupOp {
        At => "at", Arity::Fixed(2);
        Get => "get", Arity::Range(1, 2);
        Has => "has", Arity::Range(1, 2);
        Length => "length", Arity::Fixed(1);
    }
}

family! {
    MathOp {
        Subtract => "-", Arity::Range(1, 2);
        Multiply => "*", Arity::AtLeast(2);
        Divide => "/", Arity::Fixed(2);
        Remainder => "%", Arity::Fixed(2);
        Power => "^", Arity::Fixed(2);
        Add => "+", Arity::AtLeast(2);
        Abs => "abs", Arity::Fixed(1);
        Acos => "acos", Arity::Fixed(1);
        Asin => "asin", Arity::Fixed(1);
        Atan => "atan", Arity::Fixed(1);
        Ceil => "ceil", Arity::Fixed(1);
        Cos => "cos", Arity::Fixed(1);
        E => "e", Arity::Fixed(0);
        Floor => "floor", Arity::Fixed(1);
        Ln => "ln", Arity::Fixed(1);
        Ln2 => "ln2", Arity::Fixed(0);
        Log10 => "log10", Arity::Fixed(1);
        Log2 => "log2", Arity::Fixed(1);
        Max => "max", Arity::AtLeast(1);
        Min => "min", Arity::AtLeast(1);
        Pi => "pi", Arity::Fixed(0);
        Round => "round", Arity::Fixed(1);
        Sin => "sin", Arity::Fixed(1);
        Sqrt => "sqrt", Arity::Fixed(1);
        Tan => "tan", Arity::Fixed(1);
    }
}

family! {
    /// Ramps, scales and curves.
    RampOp {
        Interpolate => "interpolate", Arity::AtLeast(4);
        Step => "step", Arity::AtLeast(4);
    }
}

family! {
    StringOp {
        Concat => "concat", Arity::AtLeast(1);
        Downcase => "downcase", Arity::Fixed(1);
        Upcase => "upcase", Arity::Fixed(1);
    }
}

family! {
    /// Type assertions and conversions. Recognised so that styles using them
    /// fail loudly, but none is implemented.
    TypesOp {
        Array => "array", Arity::Any;
        Boolean => "boolean", Arity::Any;
        Collator => "collator", Arity::Any;
        Format => "format", Arity::Any;
        Literal => "literal", Arity::Any;
        Number => "number", Arity::Any;
        Object => "object", Arity::Any;
        String => "string", Arity::Any;
        ToBoolean => "to-boolean", Arity::Any;
        ToColor => "to-color", Arity::Any;
        ToNumber => "to-number", Arity::Any;
        ToString => "to-string", Arity::Any;
        Typeof => "typeof", Arity::Any;
    }
}

family! {
    VariableOp {
        Let => "let", Arity::AtLeast(3);
        Var => "var", Arity::Fixed(1);
    }
}

family! {
    ZoomOp {
        Zoom => "zoom", Arity::Fixed(0);
    }
}

/// Operator family, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Color,
    Decision,
    FeatureData,
    Heatmap,
    Lookup,
    Math,
    Ramps,
    String,
    Types,
    VariableBinding,
    Zoom,
}

/// A known operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Color(ColorOp),
    Decision(DecisionOp),
    FeatureData(FeatureDataOp),
    Heatmap(HeatmapOp),
    Lookup(LookupOp),
    Math(MathOp),
    Ramps(RampOp),
    String(StringOp),
    Types(TypesOp),
    VariableBinding(VariableOp),
    Zoom(ZoomOp),
}

impl Operator {
    #[deny(unreachable_patterns)]
    pub fn from_name(name: &str) -> Option<Operator> {
        use Operator as O;
        let op = match name {
            "rgb" => O::Color(ColorOp::Rgb),
            "rgba" => O::Color(ColorOp::Rgba),
            "to-rgba" => O::Color(ColorOp::ToRgba),

            "!" => O::Decision(DecisionOp::Not),
            "!=" => O::Decision(DecisionOp::NotEqual),
            "<" => O::Decision(DecisionOp::Less),
            "<=" => O::Decision(DecisionOp::LessEqual),
            "==" => O::Decision(DecisionOp::Equal),
            ">" => O::Decision(DecisionOp::Greater),
            ">=" => O::Decision(DecisionOp::GreaterEqual),
            "all" => O::Decision(DecisionOp::All),
            "any" => O::Decision(DecisionOp::Any),
            "case" => O::Decision(DecisionOp::Case),
            "coalesce" => O::Decision(DecisionOp::Coalesce),
            "match" => O::Decision(DecisionOp::Match),

            "geometry-type" => O::FeatureData(FeatureDataOp::GeometryType),
            "id" => O::FeatureData(FeatureDataOp::Id),
            "properties" => O::FeatureData(FeatureDataOp::Properties),

            "heatmap-density" => O::Heatmap(HeatmapOp::HeatmapDensity),

            "at" => O::Lookup(LookupOp::At),
            "get" => O::Lookup(LookupOp::Get),
            "has" => O::Lookup(LookupOp::Has),
            "length" => O::Lookup(LookupOp::Length),

            "-" => O::Math(MathOp::Subtract),
            "*" => O::Math(MathOp::Multiply),
            "/" => O::Math(MathOp::Divide),
            "%" => O::Math(MathOp::Remainder),
            "^" => O::Math(MathOp::Power),
            "+" => O::Math(MathOp::Add),
            "abs" => O::Math(MathOp::Abs),
            "acos" => O::Math(MathOp::Acos),
            "asin" => O::Math(MathOp::Asin),
            "atan" => O::Math(MathOp::Atan),
            "ceil" => O::Math(MathOp::Ceil),
            "cos" => O::Math(MathOp::Cos),
            "e" => O::Math(MathOp::E),
            "floor" => O::Math(MathOp::Floor),
            "ln" => O::Math(MathOp::Ln),
            "ln2" => O::Math(MathOp::Ln2),
            "log10" => O::Math(MathOp::Log10),
            "log2" => O::Math(MathOp::Log2),
            "max" => O::Math(MathOp::Max),
            "min" => O::Math(MathOp::Min),
            "pi" => O::Math(MathOp::Pi),
            "round" => O::Math(MathOp::Round),
            "sin" => O::Math(MathOp::Sin),
            "sqrt" => O::Math(MathOp::Sqrt),
            "tan" => O::Math(MathOp::Tan),

            "interpolate" => O::Ramps(RampOp::Interpolate),
            "step" => O::Ramps(RampOp::Step),

            "concat" => O::String(StringOp::Concat),
            "downcase" => O::String(StringOp::Downcase),
            "upcase" => O::String(StringOp::Upcase),

            "array" => O::Types(TypesOp::Array),
            "boolean" => O::Types(TypesOp::Boolean),
            "collator" => O::Types(TypesOp::Collator),
            "format" => O::Types(TypesOp::Format),
            "literal" => O::Types(TypesOp::Literal),
            "number" => O::Types(TypesOp::Number),
            "object" => O::Types(TypesOp::Object),
            "string" => O::Types(TypesOp::String),
            "to-boolean" => O::Types(TypesOp::ToBoolean),
            "to-color" => O::Types(TypesOp::ToColor),
            "to-number" => O::Types(TypesOp::ToNumber),
            "to-string" => O::Types(TypesOp::ToString),
            "typeof" => O::Types(TypesOp::Typeof),

            "let" => O::VariableBinding(VariableOp::Let),
            "var" => O::VariableBinding(VariableOp::Var),

            "zoom" => O::Zoom(ZoomOp::Zoom),

            _ => return None,
        };
        Some(op)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Color(op) => op.name(),
            Operator::Decision(op) => op.name(),
            Operator::FeatureData(op) => op.name(),
            Operator::Heatmap(op) => op.name(),
            Operator::Lookup(op) => op.name(),
            Operator::Math(op) => op.name(),
            Operator::Ramps(op) => op.name(),
            Operator::String(op) => op.name(),
            Operator::Types(op) => op.name(),
            Operator::VariableBinding(op) => op.name(),
            Operator::Zoom(op) => op.name(),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::Color(op) => op.arity(),
            Operator::Decision(op) => op.arity(),
            Operator::FeatureData(op) => op.arity(),
            Operator::Heatmap(op) => op.arity(),
            Operator::Lookup(op) => op.arity(),
            Operator::Math(op) => op.arity(),
            Operator::Ramps(op) => op.arity(),
            Operator::String(op) => op.arity(),
            Operator::Types(op) => op.arity(),
            Operator::VariableBinding(op) => op.arity(),
            Operator::Zoom(op) => op.arity(),
        }
    }

    pub fn family(self) -> Family {
        match self {
            Operator::Color(_) => Family::Color,
            Operator::Decision(_) => Family::Decision,
            Operator::FeatureData(_) => Family::FeatureData,
            Operator::Heatmap(_) => Family::Heatmap,
            Operator::Lookup(_) => Family::Lookup,
            Operator::Math(_) => Family::Math,
            Operator::Ramps(_) => Family::Ramps,
            Operator::String(_) => Family::String,
            Operator::Types(_) => Family::Types,
            Operator::VariableBinding(_) => Family::VariableBinding,
            Operator::Zoom(_) => Family::Zoom,
        }
    }

    /// Every known operator, family by family.
    pub fn all() -> Vec<Operator> {
        let mut ops = Vec::new();
        ops.extend(ColorOp::ALL.iter().map(|op| Operator::Color(*op)));
        ops.extend(DecisionOp::ALL.iter().map(|op| Operator::Decision(*op)));
        ops.extend(FeatureDataOp::ALL.iter().map(|op| Operator::FeatureData(*op)));
        ops.extend(HeatmapOp::ALL.iter().map(|op| Operator::Heatmap(*op)));
        ops.extend(LookupOp::ALL.iter().map(|op| Operator::Lookup(*op)));
        ops.extend(MathOp::ALL.iter().map(|op| Operator::Math(*op)));
        ops.extend(RampOp::ALL.iter().map(|op| Operator::Ramps(*op)));
        ops.extend(StringOp::ALL.iter().map(|op| Operator::String(*op)));
        ops.extend(TypesOp::ALL.iter().map(|op| Operator::Types(*op)));
        ops.extend(VariableOp::ALL.iter().map(|op| Operator::VariableBinding(*op)));
        ops.extend(ZoomOp::ALL.iter().map(|op| Operator::Zoom(*op)));
        ops
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
