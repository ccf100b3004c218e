//! Word literals used by the maximal-subgroup constructions.
//!
//! Every entry is the exact text form of an element of the Monster in the
//! generating set `d, p, x, y, l, t`. Entries are grouped by the construction
//! they belong to; the same name may appear in several sections.

use mgen_core::MgenError;

use crate::word::Word;

/// A named word literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Construction the literal belongs to.
    pub section: &'static str,
    /// Name of the element inside its construction.
    pub name: &'static str,
    /// Text form of the word.
    pub text: &'static str,
}

impl CatalogEntry {
    /// Parses the literal, attaching the section and name to any error.
    pub fn word(&self) -> Result<Word, MgenError> {
        Word::parse(self.text).map_err(|err| match err {
            MgenError::Word(info) => MgenError::Word(
                info.with_context("section", self.section)
                    .with_context("name", self.name),
            ),
            other => other,
        })
    }
}

/// Returns the entry named `name` in `section`.
pub fn lookup(section: &str, name: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.section == section && entry.name == name)
}

/// Returns the entries of `section` in catalogue order.
pub fn section_entries<'a>(section: &'a str) -> impl Iterator<Item = &'static CatalogEntry> + 'a {
    CATALOG.iter().filter(move |entry| entry.section == section)
}

/// Returns the distinct section names in catalogue order.
pub fn sections() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for entry in CATALOG {
        if !names.contains(&entry.section) {
            names.push(entry.section);
        }
    }
    names
}

/// Parses every literal in the catalogue.
pub fn parse_all() -> Result<Vec<(&'static CatalogEntry, Word)>, MgenError> {
    CATALOG
        .iter()
        .map(|entry| entry.word().map(|word| (entry, word)))
        .collect()
}

macro_rules! entry {
    ($section:literal, $name:literal, $text:literal) => {
        CatalogEntry {
            section: $section,
            name: $name,
            text: $text,
        }
    };
}

/// All word literals.
pub const CATALOG: &[CatalogEntry] = &[
    entry!("standard-g", "a", "M<y_2feh*x_51h*d_6f2h*p_199553794*l_2*p_1900800*l_2*p_684120>"),
    entry!("standard-g", "b", "M<y_32bh*x_0e4h*d_30fh*p_81928987*l_2*p_2880*l_1*p_21312*l_1*p_10455360>"),
    entry!("standard-g", "cent", "M<x_1000h>"),
    entry!("pgl2-13", "g13", "M<y_519h*x_0cb8h*d_3abh*p_178084032*l_2*p_2344320*l_2*p_471482*l_1*t_1*l_2*p_2830080*l_2*p_22371347*l_2*t_2*l_1*p_1499520*l_2*p_22779365*l_2*t_1*l_2*p_2597760*l_1*p_11179396*t_1*l_1*p_1499520*l_2*p_85838017*t_2*l_1*p_1499520*l_1*p_64024721*t_2*l_2*p_2386560*l_2*p_21335269>"),
    entry!("pgl2-13", "g6", "M<y_764h*x_590h*d_0bf6h*p_63465756*l_1*p_24000*l_2*p_528432*t_1*l_2*p_1457280*l_1*p_23214136*l_1*t_2*l_2*p_2344320*l_2*p_13038217*l_2*t_1*l_2*p_2956800*l_1*p_85332887*t_2*l_2*p_2830080*l_2*p_85335745*t_2*l_2*p_1900800*l_2*p_13472*t_2*l_2*p_2386560*l_2*p_85413728*t_1*l_2*p_2386560*l_2*p_53803593>"),
    entry!("pgl2-13", "i2", "M<y_6ch*x_7ch*d_52ah*p_115885662*l_2*p_2787840*l_2*p_12552610*l_2*t_1*l_2*p_1900800*l_2*p_31998118*l_2*t_2*l_2*p_80762880*l_1*p_243091248*l_2*t_1*l_2*p_2597760*l_1*p_42794439*t_1*l_1*p_1394880*l_2*p_64015152*t_1*l_1*p_2027520*l_1*p_177984*t_1*l_2*p_79432320*l_1*p_161927136>"),
    entry!("pgl2-13", "a12", "M<y_1afh*x_1661h*d_2ddh*p_208095583*l_2*p_1943040*l_2*p_1974295*l_2*t_2*l_2*p_1900800*l_2*p_10778*l_2*t_2*l_2*p_1900800*l_2*p_1868387*l_1*t_1*l_2*p_2956800*l_1*p_11159238*t_1*l_2*p_1985280*l_1*p_86275805*t_2*l_2*p_2386560*l_2*p_42712609*t_2*l_1*p_1499520*l_1*p_106699812>"),
    entry!("pgl2-13-centraliser", "y", "M<y_4fh*x_1331h*d_0d46h*p_79853974*l_2*p_1943040*l_2*p_2398522*t_1*l_2*p_2344320*l_2*p_1858757*l_2*t_1*l_1*p_960*l_2*p_3120*l_2*p_517440*t_2*l_2*p_2597760*l_1*p_12132032*t_2*l_2*p_2880*l_1*p_465840*l_1*p_1565760*t_1*l_2*p_960*l_1*p_63994992*t_1*l_1*p_2027520*l_1*p_50146>"),
    entry!("pgl2-13-centraliser", "t", "M<y_44eh*x_1906h*d_2d9h*p_173881751*l_1*p_2640000*l_1*p_1925314*l_1*t_1*l_1*p_2999040*l_1*p_2392772*l_1*t_1*l_1*p_1499520*l_1*p_32461673*l_1*t_1*l_2*p_2344320*l_2*p_84794*t_2*l_2*p_2956800*l_1*p_85413707*t_2*l_2*p_1985280*l_1*p_96477721*t_1*l_2*p_1985280*l_1*p_64023741>"),
    entry!("pgl2-13-centraliser", "l33_0", "M<y_0fh*x_0bc4h*d_59h*p_207376512*l_2*p_1943040*l_2*p_22272232*l_2*t_1*l_1*p_1499520*l_1*p_22439*l_1*t_1*l_1*p_1394880*l_1*p_21456*l_2*p_4776960*t_2*l_1*p_1499520*l_2*p_53357227*t_1*l_2*p_960*l_2*p_10665792*l_1*p_6086400*t_1*l_2*p_1943040*l_2*p_64043939*t_2*l_2*p_2956800*l_1*p_64017049>"),
    entry!("pgl2-13-centraliser", "l33_1", "M<y_5a8h*x_0bcdh*d_941h*p_205645390*l_2*p_2830080*l_2*p_8690*l_2*t_1*l_2*p_1900800*l_2*p_10675420*t_1*l_2*p_2597760*l_1*p_42728016*t_2*l_2*p_2597760*l_1*p_10729207*t_1*l_2*p_1985280*l_1*p_21338086*t_2*l_2*p_2597760*l_1*p_21359269*t_1*l_1*p_1499520*l_1*p_42755907>"),
    entry!("normalisers-13-6", "y", "M<y_4fh*x_1331h*d_0d46h*p_79853974*l_2*p_1943040*l_2*p_2398522*t_1*l_2*p_2344320*l_2*p_1858757*l_2*t_1*l_1*p_960*l_2*p_3120*l_2*p_517440*t_2*l_2*p_2597760*l_1*p_12132032*t_2*l_2*p_2880*l_1*p_465840*l_1*p_1565760*t_1*l_2*p_960*l_1*p_63994992*t_1*l_1*p_2027520*l_1*p_50146>"),
    entry!("normalisers-13-6", "yd", "M<y_8ah*x_1b2ch*d_0b85h*p_161672761*l_1*p_1499520*l_1*p_32571364*l_2*t_2*l_2*p_2956800*l_1*p_33438307*l_1*t_2*l_1*p_1393920*l_1*p_2160*l_2*p_4331520*t_1*l_2*p_2956800*l_1*p_11152592*t_1*l_2*p_1858560*l_2*p_2208*l_1*p_2028480*t_1*l_1*p_21120*l_2*p_96477744*t_1*l_2*p_1943040*l_2*p_42730017>"),
    entry!("normalisers-13-6", "yd_norm_0", "M<y_4e9h*x_1d58h*d_193h*p_241042748*l_2*p_2956800*l_1*p_13036314*l_2*t_1*l_2*p_1457280*l_1*p_12059861*l_2*t_1*l_2*p_960*l_1*p_2160*l_1*p_536640*t_1*l_2*p_2386560*l_2*p_53376357*t_2*l_2*p_1920*l_2*p_22320*l_2*p_2093760*t_2*l_1*p_1499520*l_1*p_64006449*t_2*l_2*p_2956800*l_1*p_96484459>"),
    entry!("normalisers-13-6", "yd_norm_1", "M<y_585h*x_0b11h*d_1d8h*p_42155487*l_2*p_1943040*l_2*p_31997952*l_1*t_1*l_1*p_466560*l_2*p_21797088*l_1*t_2*l_2*p_2956800*l_1*p_21886690*l_1*t_2*l_1*p_2640000*l_1*p_11541*t_2*l_2*p_1985280*l_1*p_42754979*t_1*l_1*p_1394880*l_2*p_465792*l_1*p_10330560*t_2*l_2*p_2880*l_2*p_43170912*t_1*l_1*p_2328000>"),
    entry!("normalisers-13-6", "yd_norm_2", "M<y_146h*x_4bch*d_50dh*p_24985824*l_2*p_2386560*l_2*p_474466*t_1*l_1*p_2027520*l_1*p_21891472*l_2*t_2*l_2*p_1394880*l_2*p_1152*l_1*p_1946880*t_2*l_2*p_2597760*l_1*p_42664551*t_2*l_2*p_1943040*l_2*p_96040869*t_1*l_1*p_1499520*l_2*p_21442962*t_2*l_2*p_5684160*l_1>"),
    entry!("normalisers-13-6", "yd_norm_3", "M<y_0eh*x_769h*d_90fh*p_156330167*l_1*p_2640000*l_1*p_11707800*t_2*l_1*p_23040*l_2*p_12545616*l_1*t_1*l_1*p_2640000*l_1*p_13036312*l_1*t_1*l_2*p_2597760*l_1*p_42676071*t_1*l_1*p_1436160*l_1*t_1*l_2*p_1858560*l_1*p_467856*l_2*p_6551040*t_2*l_2*p_2597760*l_1*p_96033226*t_1*l_2*p_1943040*l_2*p_85411777>"),
    entry!("normalisers-13-6", "yd_norm_4", "M<y_21h*x_0e96h*d_0e27h*p_91470589*l_2*p_1985280*l_1*p_22400*l_2*t_2*l_1*p_1394880*l_2*p_23328*l_2*t_1*l_1*p_2999040*l_1*p_1931027*l_1*t_1*l_2*p_2344320*l_2*p_9602*t_1*l_2*p_2386560*l_2*p_53842003*t_2*l_2*p_2344320*l_2*p_256933*t_1*l_1*p_1499520*l_2*p_96462321*t_1*l_2*p_1985280*l_1*p_85820722>"),
    entry!("normalisers-13-6", "yd_norm_5", "M<y_5ceh*x_1a4ah*d_0a41h*p_211770336*l_2*p_2787840*l_2*p_11672165*l_1*t_2*l_1*p_2027520*l_1*p_11601779*l_1*t_2*l_2*p_1943040*l_2*p_33019747*l_1*t_1*l_2*p_1985280*l_1*p_42675090*t_1*l_2*p_2386560*l_2*p_85417569*t_1*l_2*p_1985280*l_1*p_482049*l_1*t_1*l_2*p_1943040*l_2*p_96018819*t_1*l_2*p_2956800*l_1*p_85417555>"),
    entry!("normalisers-13-6", "yd_norm_6", "M<y_591h*x_604h*d_0c43h*p_115125231*l_2*p_2830080*l_2*p_33020690*l_2*t_1*l_2*p_1985280*l_1*p_53377298*t_1*l_2*p_2344320*l_2*p_47255*t_1*l_2*p_1985280*l_1*p_11156323*t_2*l_1*p_1499520*l_1*p_85335750*t_2*l_2*p_2956800*l_1*p_43151427*t_2*l_2*p_2597760*l_1*p_42796344>"),
    entry!("normalisers-13-6", "yd_norm_7", "M<y_89h*x_16d6h*d_65h*p_193543987*l_2*p_1457280*l_1*p_32018212*l_2*t_2*l_1*p_2027520*l_1*p_12553324*l_2*t_2*l_1*p_1499520*l_1*p_12609254*l_1*t_2*l_2*p_1943040*l_2*p_31997026*t_1*l_1*p_2999040*l_1*p_17286*t_2*l_2*p_1943040*l_2*p_43261092*t_2*l_1*p_1499520*l_2*p_42669331>"),
    entry!("normalisers-13-6", "yd_norm_8", "M<y_0d3h*x_1f20h*d_0a39h*p_174937224*l_2*p_2597760*l_1*p_22819815*t_1*l_2*p_1394880*l_2*p_2256*l_2*t_2*l_2*p_2880*l_1*p_466848*l_1*p_2556480*t_1*l_2*p_2880000*l_2*t_1*l_1*p_3840*l_2*p_929664*t_2*l_2*p_2830080*l_2*p_53436206*t_2*l_1*p_960*l_2*p_53350464*t_1*l_2*p_1985280*l_1*p_85329993>"),
    entry!("normalisers-13-6", "yd_norm_9", "M<y_2bh*x_1871h*d_103h*p_161040381*l_1*p_81206400*l_1*p_189425328*l_2*t_2*l_2*p_2597760*l_1*p_1930996*l_1*t_2*l_2*p_1900800*l_2*p_33013187*l_2*t_1*l_1*p_1499520*l_1*p_53441864*t_1*l_2*p_1985280*l_1*p_85812097*t_2*l_2*p_1943040*l_2*p_96478664*t_1*l_2*p_2956800*l_1*p_42715556>"),
    entry!("normalisers-13-6", "yd_norm_10", "M<y_95h*x_0db8h*d_867h*p_186045257*l_2*p_2830080*l_2*p_22795745*t_1*l_2*p_2344320*l_2*p_10882167*t_2*l_2*p_1394880*l_1*p_53436192*t_1*l_1*p_1499520*l_2*p_22748486*t_2*l_2*p_2344320*l_2*p_1421002*l_2*t_2*l_1*p_1499520*l_1*p_64017956*t_2*l_2*p_2956800*l_1*p_42795385>"),
    entry!("normalisers-13-6", "yd_norm_11", "M<y_6e8h*x_0c5ah*d_0dah*p_73201788*l_1*p_46168320*l_1*t_1*l_2*p_1985280*l_1*p_11322823*t_2*l_2*p_1457280*l_1*p_152099*t_2*l_2*p_2597760*l_1*p_106661296*t_2*l_2*p_2386560*l_2*p_42710748*t_2*l_2*p_2597760*l_1*p_21419893*t_2*l_2*p_1985280*l_1*p_64083395>"),
    entry!("normalisers-13-6", "y_norm_0", "M<y_5ddh*x_0cb8h*d_780h*p_101185443*l_1*p_1499520*l_1*p_6864*t_1*l_2*p_2956800*l_1*p_21865340*l_1*t_1*l_2*p_1858560*l_1*p_2112*l_2*p_975360*t_1*l_1*p_2417280*t_1*l_2*p_2830080*l_2*p_43634325*t_2*l_1*p_1499520*l_1*p_42734752*t_2*l_2*p_1985280*l_1*p_42677955>"),
    entry!("normalisers-13-6", "y_norm_1", "M<y_0ch*x_17dh*d_0a73h*p_192340543*l_2*p_2597760*l_1*p_43686374*t_2*l_2*p_2344320*l_2*p_467749*l_2*t_2*l_1*p_2640000*l_1*p_13037268*l_1*t_2*l_2*p_2344320*l_2*p_13458*t_2*l_2*p_2830080*l_2*p_64046787*t_2*l_1*p_1499520*l_2*p_63994958*t_1*l_2*p_1900800*l_2*p_139586*t_1*l_2*p_2386560*l_2*p_42727145>"),
    entry!("normalisers-13-6", "y_norm_2", "M<y_4fh*x_1331h*d_0d46h*p_79853974*l_2*p_1943040*l_2*p_2398522*t_1*l_2*p_2344320*l_2*p_1858757*l_2*t_1*l_1*p_960*l_2*p_3120*l_2*p_517440*t_2*l_2*p_2597760*l_1*p_12132032*t_2*l_2*p_2880*l_1*p_465840*l_1*p_1565760*t_1*l_2*p_960*l_1*p_63994992*t_1*l_1*p_2027520*l_1*p_50146>"),
    entry!("normalisers-13-6", "y_norm_3", "M<y_8dh*x_12aah*d_0e02h*p_64563918*l_2*p_2830080*l_2*p_32088530*t_2*l_2*p_2344320*l_2*p_12149352*l_1*t_2*l_1*p_1415040*l_1*p_10667856*l_2*p_4796160*t_2*l_1*p_1499520*l_2*p_53357163*t_1*l_2*p_960*l_2*p_464928*l_2*p_549120*t_1*l_1*p_1105920*l_2*t_2*l_2*p_1943040*l_2*p_85812172>"),
    entry!("normalisers-13-6", "yt1_norm_0", "M<y_6bah*x_40fh*d_8f6h*p_71067893*l_1*p_1499520*l_2*p_33443096*l_1*t_2*l_1*p_2027520*l_1*p_2859317*t_1*l_2*p_2597760*l_1*p_43159057*t_2*l_2*p_2597760*l_1*p_170651330*t_1*l_2*p_2830080*l_2*p_11602755*l_1*t_1*l_2*p_2386560*l_2*p_85371397*t_1*l_1*p_1499520*l_1*p_42756875>"),
    entry!("normalisers-13-6", "yt1_norm_1", "M<y_4c5h*x_194ah*d_5cfh*p_91427851*l_2*p_49272960*l_2*p_212488368*t_2*l_1*p_2640000*l_1*p_11598883*l_1*t_2*l_1*p_1457280*l_2*p_32476051*l_2*t_2*l_1*p_2027520*l_1*p_521506*t_1*l_2*p_2956800*l_1*p_106663200*t_1*l_2*p_2597760*l_1*p_42729988*t_1*l_1*p_1651200>"),
    entry!("normalisers-13-6", "yt1_norm_2", "M<y_92h*x_0dc5h*d_73fh*p_149085778*l_2*p_79875840*l_2*p_87859296*t_1*l_2*p_49716480*l_1*p_160152960*t_2*l_2*p_2386560*l_2*p_53795926*t_2*l_1*p_1499520*l_2*p_127992597*t_1*l_1*p_2640000*l_1*p_85370418*l_1*p_11658240*t_1*l_2*p_1394880*l_1*p_465840*l_2*p_3784320>"),
    entry!("normalisers-13-6", "yt1_norm_3", "M<y_503h*x_9eah*d_374h*p_233989239*l_2*p_2386560*l_2*p_23198721*l_2*t_1*l_2*p_1900800*l_2*p_22760055*l_1*t_1*l_2*p_1858560*l_1*p_10668720*l_1*p_1506240*t_1*l_1*p_2640000*l_1*p_570627*t_2*l_2*p_58143360*l_2*p_168579888*l_1*t_2>"),
    entry!("normalisers-13-6", "yt1_norm_4", "M<y_0e5h*x_1f3ah*d_6c9h*p_90562686*l_2*p_1943040*l_2*p_22779366*l_1*t_1*l_2*p_1457280*l_1*p_10708*l_2*t_1*l_2*p_1457280*l_1*p_21801795*l_1*t_1*l_2*p_169920*l_1*t_1*l_1*p_1499520*l_2*p_86283409*t_2*l_2*p_1985280*l_1*p_85840899*t_2*l_2*p_1457280*l_1*p_533034*t_1*l_2*p_2830080*l_2*p_42667401>"),
    entry!("normalisers-13-6", "yt1_norm_5", "M<y_4d7h*x_0a6eh*d_0c5ah*p_80509897*l_2*p_2386560*l_2*p_31998076*l_1*t_2*l_1*p_1499520*l_1*p_21817250*l_1*t_1*l_2*p_1985280*l_1*p_32954433*l_2*t_2*l_2*p_1457280*l_1*p_4822*t_2*l_2*p_1457280*l_1*p_2885*t_2*l_2*p_2830080*l_2*p_10702299*l_2*t_2*l_2*p_78101760*l_2*p_168136464>"),
    entry!("normalisers-13-6", "yt1_norm_6", "M<y_5c2h*x_0f48h*d_43bh*p_184125088*l_2*p_2344320*l_2*p_32552120*l_1*t_2*l_2*p_2386560*l_2*p_32961161*t_2*l_1*p_467520*l_1*p_951552*t_2*l_2*p_1900800*l_2*p_151143*t_1*l_2*p_1457280*l_1*p_32466467*l_1*t_1*l_2*p_2956800*l_1*p_106660342*t_2*l_2*p_2597760*l_1*p_42717490>"),
    entry!("normalisers-13-6", "yt1_norm_7", "M<y_136h*x_1a2dh*d_0f15h*p_106908922*l_2*p_1985280*l_1*p_53353282*t_1*l_2*p_2787840*l_2*p_32511715*l_2*t_1*l_1*p_23040*l_1*p_2370816*t_1*l_2*p_2787840*l_2*p_86282450*l_2*p_528000*t_2*l_2*p_59917440*l_1*p_152169888>"),
    entry!("normalisers-13-6", "yt1_norm_8", "M<y_158h*x_26fh*d_0f44h*p_175760587*l_2*p_2344320*l_2*p_32070138*l_1*t_2*l_2*p_24000*l_2*p_10665840*l_2*t_2*l_1*p_1920*l_2*p_24336*l_2*p_2556480*t_2*l_2*p_2899200*l_2*t_1*l_2*p_2386560*l_2*p_42676067*t_2*l_1*p_1457280*l_2*p_96478695*l_1*p_2880*t_1*l_2*p_58143360*l_2*p_241317120>"),
    entry!("normalisers-13-6", "yt1_norm_9", "M<y_472h*x_19cdh*d_397h*p_96244732*l_2*p_2830080*l_2*p_2418726*l_2*t_1*l_2*p_2956800*l_1*p_23232*l_1*t_1*l_2*p_1900800*l_2*p_2789126*l_1*t_2*l_1*p_131520*l_2*t_2*l_2*p_2956800*l_1*p_11266023*t_2*l_2*p_1943040*l_2*p_42673189*t_1*l_2*p_2956800*l_1*p_42831938*t_2*l_2*p_2830080*l_2*p_43180260>"),
    entry!("normalisers-13-6", "yt2_norm_0", "M<y_5e5h*x_1a8h*d_88h*p_158548295*l_2*p_2597760*l_1*p_42705293*t_2*l_2*p_2386560*l_2*p_12107843*l_2*t_2*l_1*p_1415040*l_1*p_10668768*l_1*p_514560*t_2*l_1*p_3338880*l_2*t_1*l_1*p_2640000*l_1*p_34689*l_1*t_1*l_1*p_2027520*l_1*p_1936*t_2*l_1*p_1499520*l_2*p_42708851>"),
    entry!("normalisers-13-6", "yt2_norm_1", "M<y_534h*x_1d6bh*d_0c5ch*p_5343566*l_2*p_2386560*l_2*p_33401737*l_2*t_1*l_1*p_1457280*l_2*p_10666763*l_2*t_2*l_2*p_1858560*l_2*p_23376*l_1*p_4205760*t_1*l_1*p_2640000*l_1*p_217442*t_1*l_2*p_2830080*l_2*p_22755377*l_2*t_2*l_2*p_1900800*l_2*p_3857*t_2*l_2*p_1943040*l_2*p_64025696>"),
    entry!("normalisers-13-6", "yt2_norm_2", "M<y_536h*x_388h*d_28fh*p_121968387*l_2*p_1457280*l_1*p_22367548*l_2*t_1*l_2*p_3840*l_1*p_464832*l_1*p_1964160*t_1*l_2*p_1943040*l_2*p_21866291*l_1*t_1*l_1*p_2027520*l_1*p_475284*t_1*l_2*p_2386560*l_2*p_64015158*t_1*l_2*p_2386560*l_2*p_42730938*t_1*l_1*p_2999040*l_1*p_176106>"),
    entry!("normalisers-13-6", "yt2_norm_3", "M<y_587h*x_9c4h*d_16fh*p_123045651*l_2*p_2956800*l_1*p_32018112*l_2*t_2*l_2*p_2344320*l_2*p_21865408*l_1*t_1*l_1*p_960*l_2*p_22272*l_2*p_998400*t_1*l_2*p_2597760*l_1*p_96477776*t_1*l_2*p_2386560*l_2*p_53382136*t_2*l_1*p_1499520*l_1*p_21383234*t_1*l_2*p_762240>"),
    entry!("normalisers-13-6", "yt2_norm_4", "M<y_549h*x_22fh*d_30dh*p_219373891*l_2*p_1457280*l_1*p_21888592*l_1*t_1*l_2*p_1985280*l_1*p_1489449*l_1*t_1*l_1*p_2999040*l_1*p_1395206*l_2*t_1*l_1*p_2027520*l_1*p_152980*t_2*l_2*p_2597760*l_1*p_53824704*t_2*l_2*p_2386560*l_2*p_53794965*t_1*l_1*p_2999040*l_1*p_5796>"),
    entry!("normalisers-13-6", "yt2_norm_5", "M<y_561h*x_1ac0h*d_2e1h*p_184737550*l_2*p_2787840*l_2*p_32971681*l_2*t_2*l_2*p_1943040*l_2*p_10805169*t_2*l_2*p_2830080*l_2*p_21345811*t_2*l_1*p_1499520*l_2*p_951568*t_2*l_2*p_2830080*l_2*p_53436236*t_2*l_1*p_4190400*l_1*t_1*l_2*p_2033280*l_1>"),
    entry!("normalisers-13-6", "yt2_norm_6", "M<y_53dh*x_1e0bh*d_0fcdh*p_243978502*l_1*p_2640000*l_1*p_21871266*l_1*t_2*l_1*p_1499520*l_1*p_12996051*t_2*l_2*p_1900800*l_2*p_6742*t_2*l_2*p_1900800*l_2*p_1016355*t_2*l_1*p_1858560*l_2*p_466800*l_1*p_4312320*t_2*l_1*p_1499520*l_2*p_64002663*t_1*l_1*p_1499520*l_1*p_64016089>"),
    entry!("normalisers-13-6", "yt2_norm_7", "M<y_4bch*x_196ah*d_0e32h*p_11572968*l_1*p_1499520*l_2*p_21796210*l_1*t_2*l_2*p_2830080*l_2*p_33414272*t_1*l_2*p_1985280*l_1*p_11158316*t_1*l_1*p_1499520*l_1*p_53801654*t_2*l_2*p_2597760*l_1*p_42711672*t_2*l_2*p_2597760*l_1*p_43634329*t_2*l_1*p_1499520*l_2*p_106663237>"),
    entry!("normalisers-13-6", "yt2_norm_8", "M<y_1e0h*x_1593h*d_5c4h*p_198886190*l_2*p_2830080*l_2*p_21817304*t_2*l_2*p_2344320*l_2*p_1523012*t_2*l_1*p_2999040*l_1*p_47170*t_1*l_1*p_951360*t_2*l_2*p_2597760*l_1*p_42754026*t_2*l_2*p_2386560*l_2*p_42835787*t_2*l_2*p_1943040*l_2*p_43594872>"),
    entry!("normalisers-13-6", "yt2_norm_9", "M<y_19bh*x_153ch*d_0d43h*p_118504558*l_2*p_2344320*l_2*p_33420998*l_1*t_2*l_1*p_1457280*l_2*p_33397762*l_2*t_2*l_1*p_3840*l_1*p_1296*l_1*p_10394880*t_2*l_1*p_1499520*l_2*p_22326208*t_2*l_2*p_2344320*l_2*p_1912610*l_1*t_1*l_2*p_1943040*l_2*p_43160087*t_2*l_2*p_2597760*l_1*p_85833248>"),
    entry!("normalisers-13-6", "yt3_norm_0", "M<y_6fh*x_1cedh*d_484h*p_125326484*l_1*p_1457280*l_2*p_2794915*l_1*t_1*l_1*p_1393920*l_2*p_3168*l_1*p_1944000*t_1*l_2*p_1457280*l_1*p_22356999*l_2*t_2*l_2*p_2597760*l_1*p_53443799*t_2*l_1*p_3840*l_2*p_22272*l_2*p_1484160*t_1*l_1*p_16874880*l_2*t_2*l_2*p_1943040*l_2*p_43198480>"),
    entry!("normalisers-13-6", "yt3_norm_1", "M<y_4abh*x_0cebh*d_709h*p_6736343*l_2*p_1900800*l_2*p_962066*t_1*l_1*p_2640000*l_1*p_2791184*l_1*t_1*l_1*p_1920*l_2*p_10665792*l_2*p_805440*t_1*l_2*p_2597760*l_1*p_21348683*t_2*l_1*p_1499520*l_1*p_53377339*t_2*l_2*p_2386560*l_2*p_96040852*t_1*l_2*p_2787840*l_2*p_18272>"),
    entry!("normalisers-13-6", "yt3_norm_2", "M<y_431h*x_9efh*d_0c8fh*p_212298532*l_1*p_2027520*l_1*p_2793088*l_2*t_2*l_2*p_1985280*l_1*p_12059808*l_1*t_2*l_1*p_2027520*l_1*p_32555960*l_1*t_2*l_1*p_2999040*l_1*p_11523*t_2*l_2*p_49716480*l_2*p_233333856*t_1*l_2*p_1415040*l_2*p_2256*l_1*p_298560*t_1*l_2*p_1943040*l_2*p_42726212*t_1*l_2*p_2597760*l_1*p_42708905>"),
    entry!("normalisers-13-6", "yt3_norm_3", "M<y_273h*x_1c47h*d_0a7ah*p_124228372*l_2*p_24000*l_2*p_149232*t_2*l_2*p_2830080*l_2*p_13002563*t_2*l_2*p_1900800*l_2*p_1016258*t_1*l_2*p_2830080*l_2*p_21331778*t_2*l_1*p_1499520*l_2*p_85332897*t_2*l_2*p_2956800*l_1*p_43261057*t_1*l_1*p_1566720>"),
    entry!("normalisers-13-6", "yt3_norm_4", "M<y_3b1h*x_106h*d_0b7dh*p_31257692*l_1*p_1457280*l_2*p_12578473*t_2*l_2*p_1985280*l_1*p_12069346*l_2*t_2*l_1*p_1499520*l_2*p_32000790*l_1*t_2*l_2*p_2597760*l_1*p_106698932*t_1*l_1*p_2640000*l_1*p_22370393*l_2*t_1*l_2*p_2787840*l_2*p_5771*t_1*l_1*p_1499520*l_2*p_85327136>"),
    entry!("normalisers-13-6", "yt3_norm_5", "M<y_0ebh*x_1339h*d_466h*p_184229543*l_2*p_2830080*l_2*p_23202562*l_1*t_2*l_2*p_2386560*l_2*p_22306055*l_1*t_2*l_2*p_1393920*l_2*p_1200*l_1*p_960000*t_2*l_2*p_1985280*l_1*p_64026658*t_2*l_2*p_1858560*l_2*p_22320*l_1*p_5239680*t_2*l_1*p_1499520*l_2*p_106662250*t_1*l_1*p_1499520*l_1*p_85336736>"),
    entry!("normalisers-13-6", "yt3_norm_6", "M<y_8ch*x_1fe0h*d_0d92h*p_225498305*l_2*p_2386560*l_2*p_21931685*t_2*l_2*p_2787840*l_2*p_8738*l_1*t_2*l_2*p_2787840*l_2*p_32064452*l_1*t_1*l_2*p_4012800*l_1*t_1*l_2*p_1943040*l_2*p_42834857*t_2*l_2*p_2597760*l_1*p_21429419*t_2*l_1*p_2640000*l_1*p_63777*t_2*l_1*p_2027520*l_1*p_4816>"),
    entry!("normalisers-13-6", "yt3_norm_7", "M<y_5ech*x_104h*d_0d43h*p_238213356*l_1*p_59473920*l_2*p_203174400*t_2*l_1*p_80762880*l_2*p_183216000*l_1*t_1*l_2*p_70118400*l_2*p_220915200*l_1*t_1*l_2*p_2344320*l_2*p_5777*t_2*l_2*p_2956800*l_1*p_127989713*t_1*l_1*p_1457280*l_2*p_42755906*l_1*p_22080*t_1*l_1*p_79875840*l_1*p_2682240*l_2>"),
    entry!("normalisers-13-6", "yt3_norm_8", "M<y_121h*x_0b4ch*d_0f29h*p_208496975*l_2*p_1900800*l_2*p_1971435*l_1*t_1*l_1*p_2027520*l_1*p_12153188*l_1*t_2*l_2*p_2787840*l_2*p_21906706*l_1*t_1*l_1*p_1499520*l_1*p_21358224*t_2*l_1*p_1499520*l_1*p_106700754*t_2*l_2*p_2956800*l_1*p_21364050*t_2*l_1*p_4671360*l_1>"),
    entry!("normalisers-13-6", "yt3_norm_9", "M<y_56h*x_187dh*d_760h*p_214410543*l_2*p_2956800*l_1*p_32473189*l_1*t_2*l_1*p_2999040*l_1*p_32065424*l_1*t_1*l_2*p_2956800*l_1*p_23216165*l_1*t_2*l_2*p_2597760*l_1*p_11242963*t_1*l_2*p_1985280*l_1*p_106664193*t_1*l_2*p_1943040*l_2*p_11308374*t_2*l_1*p_1499520*l_1*p_42713669>"),
    entry!("2B", "y", "M<d_200h>"),
    entry!("2B", "a", "M<y_0bdh*x_133h*d_0b03h*p_122433352*l_1*p_71005440*l_2*p_220471680*l_2*t_2*l_2*p_60360960*l_1*p_232890288*l_2*t_1*l_2*p_59473920*l_2*p_241760688*l_1*t_1*l_1*p_13326720*l_2>"),
    entry!("2B", "b", "M<y_480h*x_15a9h*d_800h*p_55059691*l_1*p_71005440*l_1*p_199182768*t_1*l_1*p_59917440*l_1*p_242647728*l_1*t_1*l_1*p_49716480*l_1*p_240430080*l_1*t_1*l_2*p_15987840*l_2*t_1*l_2*p_141081600>"),
    entry!("2B", "g104", "M<y_9dh*x_10cbh*d_0ab9h*p_185877467*l_2*p_50603520*l_1*p_210270720*l_1*t_2*l_2*p_70561920*l_2*p_181885440*l_2*t_1*l_2*p_69231360*l_2*p_168579888*l_1*t_2*l_1*p_4012800*l_1*t_1*l_2*p_119792640>"),
    entry!("2B", "g78", "M<y_163h*x_1489h*d_0a93h*p_107838533*l_2*p_70118400*l_2*p_12439680*t_1*l_1*p_45281280*l_2*p_71871360*l_1*t_2*l_1*p_71005440*l_2*p_179667888*l_1*t_2*l_2*p_60804480*l_1*p_152169888>"),
    entry!("s3-th", "c2", "M<d_200h>"),
    entry!("s3-th", "c3", "M<y_4cdh*x_1274h*d_499h*p_8151915*l_2*p_1900800*l_2*p_43255347*t_2*l_2*p_2597760*l_1*p_479249*l_2*t_2*l_1*p_4654080*t_1*l_2*p_2956800*l_1*p_53436116*t_2*l_2*p_2386560*l_2*p_85412773*t_1*l_1*p_1499520*l_1*p_106661296>"),
    entry!("s3-th", "a", "M<y_4ch*x_47ah*d_0e20h*p_218274859*l_1*p_49272960*l_1*p_151726128*t_1*l_1*p_74997120*l_2*p_71871360*l_1*t_2*l_1*p_60804480*l_2*p_229785600*l_1*t_1*l_1*p_58143360*l_1*p_160153296>"),
    entry!("s3-th", "b", "M<y_0b5h*x_955h*d_0e1h*p_197852501*l_1*p_70561920*l_1*p_232890288*l_1*t_1*l_1*p_79875840*l_1*p_203617920*l_2*t_2*l_2*p_68344320*l_2*p_202730880*l_1*t_1*l_1*p_117575040*l_1*t_2*l_1*p_109148160*l_2>"),
    entry!("s3-th", "g39", "M<y_0f7h*x_4d8h*d_711h*p_106931325*l_2*p_70118400*l_1*p_190312368*l_1*t_1*l_2*p_80319360*l_1*p_222245808*l_2*t_1*l_1*p_67900800*l_1*p_11552640*l_2*t_1*l_2*p_70118400*l_1*p_179668128>"),
    entry!("3fi24", "g3", "M<y_3dbh*x_14c9h*d_1c6h*p_238425007*l_2*p_1985280*l_1*p_11174636*l_2>"),
    entry!("3fi24", "a", "M<y_5f6h*x_0fbeh*d_2ebh*p_193227272*l_2*p_2830080*l_2*p_32067203*t_2*l_2*p_2344320*l_2*p_12596663*l_1*t_2*l_2*p_1415040*l_1*p_21817200*l_2*t_2*l_2*p_1943040*l_2*p_22351232*l_2*t_1*l_1*p_2027520*l_1*p_13443*t_2*l_1*p_1457280*l_2*p_53938>"),
    entry!("3fi24", "b", "M<y_743h*x_11f4h*d_391h*p_92316215*l_1*p_2999040*l_1*p_467894*t_1*l_1*p_2999040*l_1*p_26931*l_1*t_2*l_2*p_1900800*l_2*p_33465249*l_1*t_1*l_2*p_2830080*l_2*p_85326162*t_2*l_1*p_1457280*l_2*p_129106*t_2*l_1*p_1499520*l_2*p_1485571*l_1*t_1*l_2*p_2597760*l_1*p_53391808*t_2*l_1*p_1499520*l_2*p_42667429>"),
    entry!("3fi24", "g46", "M<y_5feh*x_1f1h*d_292h*p_192994065*l_2*p_60360960*l_1*p_230672640*t_1*l_2*p_1985280*l_1*p_12135864*l_1*t_2*l_1*p_1457280*l_2*p_36672*l_1*t_2*l_2*p_2597760*l_1*p_63996822*t_1*l_2*p_1943040*l_2*p_11604637*l_2*t_1*l_2*p_1943040*l_2*p_63998817*t_2*l_2*p_2956800*l_1*p_42706001>"),
    entry!("3fi24", "g40", "M<y_57fh*x_1d3h*d_603h*p_39537390*l_2*p_2344320*l_2*p_53820870*t_2*l_1*p_1457280*l_2*p_464944*l_2*t_1*l_2*p_1985280*l_1*p_32547596*l_2*t_2*l_2*p_1943040*l_2*p_43600722*t_1*l_2*p_1985280*l_1*p_42731872*t_2*l_2*p_1457280*l_1*p_71216*t_2*l_2*p_2956800*l_1*p_106698940>"),
    entry!("psl2-29-2", "a", "M<x_1000h>"),
    entry!("psl2-29-2", "b", "M<y_0a7h*x_51fh*d_0d58h*p_43929380*l_2*p_2344320*l_2*p_11172722*t_2*l_1*p_1457280*l_2*p_572681*t_1*l_2*p_2830080*l_2*p_64084352*t_1*l_2*p_1943040*l_2*p_85812140*t_1*l_2*p_2386560*l_2*p_42676049*t_1*l_2*p_2830080*l_2*p_85373280*t_1*l_2*p_2386560*l_2*p_42666435>"),
];
