use picker::Candidate;

/// Built-in list used when no candidate file is given.
pub fn default_people() -> Vec<Candidate> {
    [
        ("Carolus Haverbeke", "carolus-haverbeke-1832"),
        ("Emma de Milliano", "emma-de-milliano-1876"),
        ("Maria de Rycke", "maria-de-rycke-1683"),
        ("Jan van Brussel", "jan-van-brussel-1714"),
        ("Philibert Haverbeke", "philibert-haverbeke-1907"),
        ("Jan Frans van Brussel", "jan-frans-van-brussel-1761"),
        ("Pauwels van Haverbeke", "pauwels-van-haverbeke-1535"),
        ("Clara Aernoudts", "clara-aernoudts-1918"),
        ("Emile Haverbeke", "emile-haverbeke-1877"),
        ("Lieven van Haverbeke", "lieven-van-haverbeke-1570"),
        ("Pieter Haverbeke", "pieter-haverbeke-1602"),
        ("Anna van Hecke", "anna-van-hecke-1607"),
    ]
    .into_iter()
    .map(|(name, slug)| Candidate::new(name, slug))
    .collect()
}
