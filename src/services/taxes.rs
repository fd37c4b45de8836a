// src/services/taxes.rs
//
// Motor de cálculo fiscal: funciones puras y deterministas, sin E/S.
// Trabaja sobre `Decimal` y no redondea nunca; el redondeo a dos decimales
// es responsabilidad de quien presenta los valores.

use rust_decimal::Decimal;

use crate::models::taxes::{InvoiceTotals, Model130Result, Model303Result};

/// Tipo del pago fraccionado del IRPF: 20% del rendimiento neto.
const MODEL_130_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Totales de una línea de factura.
///
/// `subtotal = precio * cantidad`, el IVA suma y el IRPF retiene.
pub fn invoice_totals(
    unit_price: Decimal,
    quantity: Decimal,
    iva_pct: Decimal,
    irpf_pct: Decimal,
) -> InvoiceTotals {
    let subtotal = unit_price * quantity;
    let iva = subtotal * iva_pct / Decimal::ONE_HUNDRED;
    let irpf = subtotal * irpf_pct / Decimal::ONE_HUNDRED;
    let total = subtotal + iva - irpf;

    InvoiceTotals {
        subtotal,
        iva,
        irpf,
        total,
    }
}

/// Modelo 303: autoliquidación trimestral de IVA.
///
/// Con resultado positivo hay cuota a ingresar; con resultado negativo la
/// diferencia queda a compensar en trimestres siguientes.
pub fn model_303(cuota_iva: Decimal, iva_deducible: Decimal) -> Model303Result {
    let resultado = cuota_iva - iva_deducible;

    Model303Result {
        cuota_devengada: cuota_iva,
        cuota_deducible: iva_deducible,
        resultado,
        a_ingresar: if resultado > Decimal::ZERO {
            resultado
        } else {
            Decimal::ZERO
        },
        a_compensar: if resultado < Decimal::ZERO {
            resultado.abs()
        } else {
            Decimal::ZERO
        },
    }
}

/// Modelo 130: pago fraccionado del IRPF en estimación directa.
///
/// El resultado se recorta a cero: un exceso de pagos previos nunca se
/// muestra como importe negativo (el sobrante se descarta en esta fórmula).
pub fn model_130(ingresos: Decimal, gastos: Decimal, pagos_previos: Decimal) -> Model130Result {
    let rendimiento_neto = ingresos - gastos;
    let cuota_tributaria = rendimiento_neto * MODEL_130_RATE;
    let resultado = (cuota_tributaria - pagos_previos).max(Decimal::ZERO);

    Model130Result {
        rendimiento_neto,
        cuota_tributaria,
        resultado,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn totales_de_factura_con_iva_e_irpf() {
        let totals = invoice_totals(d(100), d(2), d(21), d(15));
        assert_eq!(totals.subtotal, d(200));
        assert_eq!(totals.iva, d(42));
        assert_eq!(totals.irpf, d(30));
        assert_eq!(totals.total, d(212));
    }

    #[test]
    fn totales_con_porcentajes_a_cero() {
        let totals = invoice_totals(d(50), d(3), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(totals.subtotal, d(150));
        assert_eq!(totals.total, d(150));
    }

    #[test]
    fn modelo_303_con_resultado_a_ingresar() {
        let result = model_303(d(2100), d(500));
        assert_eq!(result.resultado, d(1600));
        assert_eq!(result.a_ingresar, d(1600));
        assert_eq!(result.a_compensar, Decimal::ZERO);
    }

    #[test]
    fn modelo_303_con_resultado_a_compensar() {
        let result = model_303(d(300), d(500));
        assert_eq!(result.resultado, d(-200));
        assert_eq!(result.a_ingresar, Decimal::ZERO);
        assert_eq!(result.a_compensar, d(200));
    }

    #[test]
    fn modelo_303_en_equilibrio() {
        let result = model_303(d(500), d(500));
        assert_eq!(result.a_ingresar, Decimal::ZERO);
        assert_eq!(result.a_compensar, Decimal::ZERO);
    }

    #[test]
    fn modelo_130_sin_pagos_previos() {
        let result = model_130(d(15000), d(5000), Decimal::ZERO);
        assert_eq!(result.rendimiento_neto, d(10000));
        assert_eq!(result.cuota_tributaria, d(2000));
        assert_eq!(result.resultado, d(2000));
    }

    #[test]
    fn modelo_130_recorta_el_resultado_negativo_a_cero() {
        let result = model_130(d(10000), d(8000), d(1000));
        assert_eq!(result.rendimiento_neto, d(2000));
        assert_eq!(result.cuota_tributaria, d(400));
        // 400 - 1000 < 0: el exceso de pagos previos no produce un
        // importe a devolver, se recorta a cero.
        assert_eq!(result.resultado, Decimal::ZERO);
    }
}
