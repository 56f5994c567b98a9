pub enum Bibliography {
    /// CCSDS 502.0-B-2, Orbit Data Messages, Blue Book, 2009
    /// [DOI](https://public.ccsds.org/Pubs/502x0b2c1e2.pdf)
    CCSDS502B2,
    /// D. A. Vallado, * Fundamentals of Astrodynamics and Applications *, 4th edition, 2013.
    /// IAU-76/FK5 reduction and GMST, chapter 3.
    Vallado2013,
    /// Lieske et al., 1977 * Expressions for the Precession Quantities Based upon the IAU (1976) System of Astronomical Constants *
    Lieske1977,
    /// J. M. Wahr, 1981 / Seidelmann, 1982 * 1980 IAU Theory of Nutation *
    Seidelmann1982,
    /// C. Japhet, 2021 * Méthodes Numériques II - Interpolation Polynomiale *
    Japhet2021,
}
